//! DTOs for the games adapter.

use sea_orm::FromQueryResult;

/// One row of the games ⋈ table cards query; repeated once per card.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct GameCardRow {
    pub game_id: i64,
    pub round: String,
    pub minimum_bet: String,
    pub maximum_bet: String,
    pub bet_pool: String,
    pub card_number: Option<String>,
    pub suit: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GameCreate {
    pub round_id: i64,
    pub minimum_bet: String,
    pub maximum_bet: String,
    pub bet_pool: String,
}
