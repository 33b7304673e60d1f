//! Member repository.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::debug;

use super::attributes::ChangeSet;
use super::merge::expect_at_most_one;
use super::reference;
use crate::adapters::members_sea::{self as members_adapter, MemberCreate, MemberFilter};
use crate::entities::members;
use crate::errors::domain::DomainError;

pub const DEFAULT_LEVEL: &str = "1";
pub const DEFAULT_EXP_OVER_LEVEL: &str = "0";

/// Member domain model; level fields are stored as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub nickname: String,
    pub email: String,
    pub level: String,
    pub exp_over_level: String,
}

impl From<members::Model> for Member {
    fn from(model: members::Model) -> Self {
        Self {
            id: model.member_id,
            nickname: model.member_nickname,
            email: model.member_email,
            level: model.member_level,
            exp_over_level: model.member_exp_over_level,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewMember {
    pub nickname: String,
    pub email: String,
    pub level: Option<String>,
    pub exp_over_level: Option<String>,
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &MemberFilter,
) -> Result<Vec<Member>, DomainError> {
    let models = members_adapter::list(conn, filter).await?;
    Ok(models.into_iter().map(Member::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    member_id: i64,
) -> Result<Option<Member>, DomainError> {
    let models = members_adapter::rows_by_id(conn, member_id).await?;
    Ok(expect_at_most_one(models)?.map(Member::from))
}

/// True iff every id refers to a stored member. An empty set is trivially
/// true and touches no table.
pub async fn all_exist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    member_ids: &[i64],
) -> Result<bool, DomainError> {
    if member_ids.is_empty() {
        return Ok(true);
    }

    let mut distinct = member_ids.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let found = members_adapter::count_existing(conn, &distinct).await?;
    debug!(wanted = distinct.len(), found, "member existence check");
    Ok(found == distinct.len() as u64)
}

pub async fn create(txn: &DatabaseTransaction, new: NewMember) -> Result<Member, DomainError> {
    let model = members_adapter::create_member(
        txn,
        MemberCreate {
            nickname: new.nickname,
            email: new.email,
            level: new.level.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            exp_over_level: new
                .exp_over_level
                .unwrap_or_else(|| DEFAULT_EXP_OVER_LEVEL.to_string()),
        },
    )
    .await?;
    Ok(Member::from(model))
}

/// Apply a patch. An empty change set is a successful no-op.
pub async fn patch(
    txn: &DatabaseTransaction,
    member_id: i64,
    changes: ChangeSet<members::Column>,
) -> Result<bool, DomainError> {
    if changes.fields.is_empty() {
        return Ok(true);
    }

    let values = reference::resolve_fields(txn, changes.fields).await?;
    let updated = members_adapter::update_fields(txn, member_id, values).await?;
    Ok(updated > 0)
}

/// Delete a member together with its seats and their cards.
/// Returns false when there was no such member.
pub async fn delete(txn: &DatabaseTransaction, member_id: i64) -> Result<bool, DomainError> {
    let removed = members_adapter::delete_member_cascade(txn, member_id).await?;
    Ok(removed > 0)
}
