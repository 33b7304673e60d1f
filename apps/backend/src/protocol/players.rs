use serde::{Deserialize, Serialize};

use super::games::game_path;
use super::jsonapi::{card_views, parse_number, CardView, Document, Links, Resource};
use crate::errors::domain::DomainError;
use crate::repos::players::PlayerWithCards;

pub const PLAYER_TYPE: &str = "player";

/// Member fields are null for a seat nobody holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAttributes {
    pub member_nickname: Option<String>,
    pub member_id: Option<String>,
    pub member_level: Option<i64>,
    pub member_exp_over_level: Option<i64>,
    pub player_bet: i64,
    pub player_status: String,
    pub player_cards: Vec<CardView>,
}

pub type PlayerResource = Resource<PlayerAttributes>;

pub fn players_path(game_id: i64) -> String {
    format!("{}/players", game_path(game_id))
}

pub fn player_path(game_id: i64, player_id: i64) -> String {
    format!("{}/{player_id}", players_path(game_id))
}

fn optional_number(field: &str, raw: Option<&str>) -> Result<Option<i64>, DomainError> {
    raw.map(|r| parse_number(field, r)).transpose()
}

fn player_resource(player: &PlayerWithCards) -> Result<PlayerResource, DomainError> {
    let record = &player.parent;
    Ok(Resource {
        kind: PLAYER_TYPE.to_string(),
        id: record.player_id.to_string(),
        links: Links::to(player_path(record.game_id, record.player_id)),
        attributes: PlayerAttributes {
            member_nickname: record.member_nickname.clone(),
            member_id: record.member_id.map(|id| id.to_string()),
            member_level: optional_number("memberLevel", record.member_level.as_deref())?,
            member_exp_over_level: optional_number(
                "memberExpOverLevel",
                record.member_exp_over_level.as_deref(),
            )?,
            player_bet: parse_number("playerBet", &record.player_bet)?,
            player_status: record.player_status.clone(),
            player_cards: card_views(&player.cards),
        },
    })
}

pub fn serialize_player(player: &PlayerWithCards) -> Result<Document<PlayerResource>, DomainError> {
    Ok(Document {
        links: Links::to(player_path(player.parent.game_id, player.parent.player_id)),
        data: player_resource(player)?,
    })
}

pub fn serialize_players(
    players: &[PlayerWithCards],
    game_id: i64,
) -> Result<Document<Vec<PlayerResource>>, DomainError> {
    let data = players
        .iter()
        .map(player_resource)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Document {
        links: Links::to(players_path(game_id)),
        data,
    })
}
