use serde::{Deserialize, Serialize};

use super::jsonapi::{card_views, parse_number, CardView, Document, Links, Resource};
use crate::errors::domain::DomainError;
use crate::repos::games::GameWithCards;

pub const GAME_TYPE: &str = "game";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameAttributes {
    pub round: String,
    pub minimum_bet: i64,
    pub maximum_bet: i64,
    pub bet_pool: i64,
    pub table_cards: Vec<CardView>,
}

/// `GET /v1/games` query string.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GameQuery {
    pub round: Option<String>,
}

impl GameQuery {
    /// Requested round; `?round=` counts as no filter.
    pub fn round(&self) -> Option<&str> {
        self.round.as_deref().filter(|r| !r.is_empty())
    }
}

pub type GameResource = Resource<GameAttributes>;

pub fn game_path(game_id: i64) -> String {
    format!("/games/{game_id}")
}

fn game_resource(game: &GameWithCards) -> Result<GameResource, DomainError> {
    let record = &game.parent;
    Ok(Resource {
        kind: GAME_TYPE.to_string(),
        id: record.game_id.to_string(),
        links: Links::to(game_path(record.game_id)),
        attributes: GameAttributes {
            round: record.round.clone(),
            minimum_bet: parse_number("minimumBet", &record.minimum_bet)?,
            maximum_bet: parse_number("maximumBet", &record.maximum_bet)?,
            bet_pool: parse_number("betPool", &record.bet_pool)?,
            table_cards: card_views(&game.cards),
        },
    })
}

pub fn serialize_game(game: &GameWithCards) -> Result<Document<GameResource>, DomainError> {
    Ok(Document {
        links: Links::to(game_path(game.parent.game_id)),
        data: game_resource(game)?,
    })
}

/// Serialize a list, keeping only the games that match `query`.
pub fn serialize_games(
    games: &[GameWithCards],
    query: &GameQuery,
    self_path: &str,
) -> Result<Document<Vec<GameResource>>, DomainError> {
    let data = games
        .iter()
        .filter(|g| query.round().map_or(true, |r| g.parent.round == r))
        .map(game_resource)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Document {
        links: Links::to(self_path),
        data,
    })
}
