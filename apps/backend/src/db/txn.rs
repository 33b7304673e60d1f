use actix_web::HttpRequest;
use futures_util::future::LocalBoxFuture;
use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::{debug, warn};

use super::{require_db, txn_policy};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Execute `f` inside one database transaction.
///
/// Begins a transaction on the pool, runs the closure, then applies the
/// [`txn_policy`] on `Ok` or rolls back on `Err`. Leaf repository code never
/// commits or rolls back; this is the only place that decides.
///
/// The closure must own everything it captures:
///
/// ```ignore
/// with_txn(Some(&req), &state, move |txn| {
///     Box::pin(async move { members::find_by_id(txn, id).await.map_err(AppError::from) })
/// })
/// ```
pub async fn with_txn<R, F>(
    req: Option<&HttpRequest>,
    state: &AppState,
    f: F,
) -> Result<R, AppError>
where
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> LocalBoxFuture<'t, Result<R, AppError>>,
{
    let path = req.map(|r| r.path().to_string());
    let db = require_db(state)?;
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            match txn_policy::current() {
                txn_policy::TxnPolicy::CommitOnOk => txn.commit().await?,
                txn_policy::TxnPolicy::RollbackOnOk => txn.rollback().await?,
            }
            Ok(val)
        }
        Err(err) => {
            debug!(path = ?path, error = %err, "rolling back transaction");
            // Best-effort rollback; preserve original error
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}
