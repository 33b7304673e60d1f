//! JSON:API document envelope shared by every resource.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::error;

use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::merge::CardRow;

pub const BASE_PATH: &str = "/v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: String,
}

impl Links {
    pub fn to(path: impl AsRef<str>) -> Self {
        Self {
            self_link: format!("{BASE_PATH}{}", path.as_ref()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resource<A> {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub links: Links,
    pub attributes: A,
}

/// Top-level `{ links, data }` response body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Document<D> {
    pub links: Links,
    pub data: D,
}

/// A card as rendered in `tableCards` / `playerCards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub card_number: String,
    pub card_suit: String,
}

impl From<&CardRow> for CardView {
    fn from(card: &CardRow) -> Self {
        Self {
            card_number: card.number.clone(),
            card_suit: card.suit.clone(),
        }
    }
}

pub fn card_views(cards: &[CardRow]) -> Vec<CardView> {
    cards.iter().map(CardView::from).collect()
}

/// Request body: `{ "data": { "type": ..., "attributes": { ... } } }`.
#[derive(Clone, Debug, Deserialize)]
pub struct RequestDocument {
    pub data: RequestResource,
}

/// A client-supplied `id` is accepted and dropped; the store assigns ids.
#[derive(Clone, Debug, Deserialize)]
pub struct RequestResource {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl RequestDocument {
    /// Attributes of a document whose type must be `expected`.
    pub fn into_attributes(self, expected: &str) -> Result<Map<String, Value>, DomainError> {
        if self.data.kind != expected {
            return Err(DomainError::validation(
                ValidationKind::ResourceTypeMismatch,
                format!(
                    "Expected resource type '{expected}', got '{}'",
                    self.data.kind
                ),
            ));
        }
        Ok(self.data.attributes)
    }
}

/// Parse a numeric column stored as text.
pub fn parse_number(field: &str, raw: &str) -> Result<i64, DomainError> {
    raw.trim().parse::<i64>().map_err(|_| {
        error!(field, raw, "stored value is not an integer");
        DomainError::data_corruption(format!("Stored {field} is not an integer"))
    })
}
