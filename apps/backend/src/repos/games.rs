//! Game repository: games with their table cards.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::debug;

use super::attributes::ChangeSet;
use super::merge::{expect_at_most_one, merge_rows, CardRow, JoinRow, Keyed, Merged};
use super::reference;
use crate::adapters::games_sea::{self as games_adapter, GameCardRow, GameCreate};
use crate::domain::{Card, Round};
use crate::entities::games;
use crate::errors::domain::DomainError;

/// Game columns as stored; bets are text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub game_id: i64,
    pub round: String,
    pub minimum_bet: String,
    pub maximum_bet: String,
    pub bet_pool: String,
}

impl Keyed for GameRecord {
    type Key = i64;

    fn key(&self) -> i64 {
        self.game_id
    }
}

impl JoinRow for GameCardRow {
    type Parent = GameRecord;

    fn split(self) -> (GameRecord, Vec<CardRow>) {
        let card = CardRow::from_columns(self.card_number, self.suit);
        (
            GameRecord {
                game_id: self.game_id,
                round: self.round,
                minimum_bet: self.minimum_bet,
                maximum_bet: self.maximum_bet,
                bet_pool: self.bet_pool,
            },
            card.into_iter().collect(),
        )
    }
}

pub type GameWithCards = Merged<GameRecord>;

#[derive(Debug, Clone, Default)]
pub struct GameFilter {
    pub round: Option<Round>,
}

#[derive(Debug, Clone)]
pub struct NewGame {
    pub round: Round,
    pub minimum_bet: String,
    pub maximum_bet: String,
    pub bet_pool: String,
    pub table_cards: Vec<Card>,
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &GameFilter,
) -> Result<Vec<GameWithCards>, DomainError> {
    let rows = games_adapter::list_rows(conn, filter.round.map(Round::as_str)).await?;
    debug!(rows = rows.len(), "games fetched");
    Ok(merge_rows(rows))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<GameWithCards>, DomainError> {
    let rows = games_adapter::rows_by_id(conn, game_id).await?;
    expect_at_most_one(merge_rows(rows))
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<bool, DomainError> {
    Ok(games_adapter::exists(conn, game_id).await?)
}

/// Games in which the member holds a seat.
pub async fn list_by_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    member_id: i64,
) -> Result<Vec<GameWithCards>, DomainError> {
    let rows = games_adapter::rows_by_member(conn, member_id).await?;
    Ok(merge_rows(rows))
}

/// Insert a game and deal its table cards. Returns the new game id.
pub async fn create(txn: &DatabaseTransaction, new: NewGame) -> Result<i64, DomainError> {
    let round_id = reference::round_id(txn, new.round).await?;
    let card_ids = reference::card_ids(txn, &new.table_cards).await?;

    let game = games_adapter::create_game(
        txn,
        GameCreate {
            round_id,
            minimum_bet: new.minimum_bet,
            maximum_bet: new.maximum_bet,
            bet_pool: new.bet_pool,
        },
    )
    .await?;

    if !card_ids.is_empty() {
        games_adapter::replace_table_cards(txn, game.game_id, &card_ids).await?;
    }
    debug!(game_id = game.game_id, cards = card_ids.len(), "game created");
    Ok(game.game_id)
}

/// Apply a patch. An empty change set is a successful no-op; otherwise the
/// result is whether the game row was updated.
pub async fn patch(
    txn: &DatabaseTransaction,
    game_id: i64,
    changes: ChangeSet<games::Column>,
) -> Result<bool, DomainError> {
    if let Some(cards) = changes.cards.into_option() {
        let card_ids = reference::card_ids(txn, &cards).await?;
        games_adapter::replace_table_cards(txn, game_id, &card_ids).await?;
    }

    if changes.fields.is_empty() {
        return Ok(true);
    }

    let values = reference::resolve_fields(txn, changes.fields).await?;
    let updated = games_adapter::update_fields(txn, game_id, values).await?;
    Ok(updated > 0)
}
