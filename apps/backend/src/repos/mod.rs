//! Repository functions for the domain layer (generic over ConnectionTrait).

pub mod attributes;
pub mod games;
pub mod members;
pub mod merge;
pub mod players;
pub mod reference;

use std::collections::HashSet;

/// Whether `ids` contains any value more than once.
pub fn has_duplicates(ids: &[i64]) -> bool {
    let distinct: HashSet<&i64> = ids.iter().collect();
    distinct.len() < ids.len()
}
