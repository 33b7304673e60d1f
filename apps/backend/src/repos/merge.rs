//! Folds flat join rows back into parents with ordered card lists.
//!
//! A query joining a game (or player) to its cards returns one row per card,
//! with the parent columns repeated. [`merge_rows`] groups those rows by the
//! parent key in one pass, keeping first-seen parent order and row order
//! within each parent.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::error;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// One card on a join row, as raw text from the reference tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    pub number: String,
    pub suit: String,
}

impl CardRow {
    /// Card carried by a LEFT JOIN row; `None` when the parent has no card on this row.
    pub fn from_columns(number: Option<String>, suit: Option<String>) -> Option<CardRow> {
        match (number, suit) {
            (Some(number), Some(suit)) => Some(CardRow { number, suit }),
            _ => None,
        }
    }
}

/// The part of a row that identifies and describes the parent entity.
pub trait Keyed {
    type Key: Eq + Hash + Clone;

    fn key(&self) -> Self::Key;
}

/// A row that can be split into its parent and the cards it carries.
pub trait JoinRow {
    type Parent: Keyed;

    fn split(self) -> (Self::Parent, Vec<CardRow>);
}

/// A parent with every card that was joined to it, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged<P> {
    pub parent: P,
    pub cards: Vec<CardRow>,
}

// Merged rows are themselves join rows, which makes merging idempotent.
impl<P: Keyed> JoinRow for Merged<P> {
    type Parent = P;

    fn split(self) -> (P, Vec<CardRow>) {
        (self.parent, self.cards)
    }
}

pub fn merge_rows<R, I>(rows: I) -> Vec<Merged<R::Parent>>
where
    R: JoinRow,
    I: IntoIterator<Item = R>,
{
    let mut index: HashMap<<R::Parent as Keyed>::Key, usize> = HashMap::new();
    let mut merged: Vec<Merged<R::Parent>> = Vec::new();

    for row in rows {
        let (parent, cards) = row.split();
        match index.entry(parent.key()) {
            Entry::Occupied(slot) => merged[*slot.get()].cards.extend(cards),
            Entry::Vacant(slot) => {
                slot.insert(merged.len());
                merged.push(Merged { parent, cards });
            }
        }
    }

    merged
}

/// Classify the result of a by-id lookup.
///
/// Zero entities is `None`; more than one means the query joined wrongly and
/// is reported as a contract violation.
pub fn expect_at_most_one<T>(mut items: Vec<T>) -> Result<Option<T>, DomainError> {
    match items.len() {
        0 => Ok(None),
        1 => Ok(items.pop()),
        n => {
            error!(count = n, "by-id lookup returned multiple entities");
            Err(DomainError::infra(
                InfraErrorKind::ContractViolation,
                "Expect a single object but got multiple results.",
            ))
        }
    }
}
