//! DTOs for the players adapter.

use sea_orm::FromQueryResult;

/// One row of the players ⋈ member ⋈ player cards query; repeated once per card.
/// Member columns are null for a seat without a member.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct PlayerCardRow {
    pub player_id: i64,
    pub game_id: i64,
    pub member_id: Option<i64>,
    pub member_nickname: Option<String>,
    pub member_level: Option<String>,
    pub member_exp_over_level: Option<String>,
    pub player_bet: String,
    pub player_status: String,
    pub card_number: Option<String>,
    pub suit: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub game_id: i64,
    pub member_id: Option<i64>,
    pub player_bet: String,
    pub status_id: i64,
}
