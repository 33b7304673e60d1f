//! Card, round and status lookups against the seeded reference tables.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, Value};

use super::attributes::FieldValue;
use crate::adapters::reference_sea;
use crate::domain::{Card, PlayerStatus, Round};
use crate::errors::domain::{DomainError, ValidationKind};

/// Card ids for `cards`, in the same order. Any card missing from the deck is
/// rejected as a whole.
pub async fn card_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    cards: &[Card],
) -> Result<Vec<i64>, DomainError> {
    if cards.is_empty() {
        return Ok(Vec::new());
    }

    let pairs: Vec<(&str, &str)> = cards
        .iter()
        .map(|c| (c.card_number.as_str(), c.card_suit.as_str()))
        .collect();
    let found: HashMap<(String, String), i64> = reference_sea::find_cards(conn, &pairs)
        .await?
        .into_iter()
        .map(|row| ((row.card_number, row.suit), row.card_id))
        .collect();

    pairs
        .iter()
        .map(|(number, suit)| {
            found
                .get(&(number.to_string(), suit.to_string()))
                .copied()
                .ok_or_else(|| {
                    DomainError::validation(
                        ValidationKind::UnknownCard,
                        format!("Unknown card: {number} of {suit}"),
                    )
                })
        })
        .collect()
}

pub async fn round_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round: Round,
) -> Result<i64, DomainError> {
    reference_sea::round_id(conn, round.as_str())
        .await?
        .ok_or_else(|| {
            DomainError::data_corruption(format!(
                "Round '{}' missing from reference data",
                round.as_str()
            ))
        })
}

pub async fn status_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    status: PlayerStatus,
) -> Result<i64, DomainError> {
    reference_sea::status_id(conn, status.as_str())
        .await?
        .ok_or_else(|| {
            DomainError::data_corruption(format!(
                "Status '{}' missing from reference data",
                status.as_str()
            ))
        })
}

/// Turn parsed attribute values into column values, resolving enum names to
/// their reference ids.
pub async fn resolve_fields<C, Col>(
    conn: &C,
    fields: Vec<(Col, FieldValue)>,
) -> Result<Vec<(Col, Value)>, DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    let mut resolved = Vec::with_capacity(fields.len());
    for (column, value) in fields {
        let value = match value {
            FieldValue::Text(text) => Value::from(text),
            FieldValue::Round(round) => Value::from(round_id(conn, round).await?),
            FieldValue::Status(status) => Value::from(status_id(conn, status).await?),
        };
        resolved.push((column, value));
    }
    Ok(resolved)
}
