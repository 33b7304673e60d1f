//! Player repository: seats in a game with the member's public fields and
//! the cards in hand.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::debug;

use super::attributes::ChangeSet;
use super::merge::{expect_at_most_one, merge_rows, CardRow, JoinRow, Keyed, Merged};
use super::reference;
use crate::adapters::players_sea::{self as players_adapter, PlayerCardRow, PlayerCreate};
use crate::domain::{Card, PlayerStatus};
use crate::entities::players;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub player_id: i64,
    pub game_id: i64,
    pub member_id: Option<i64>,
    pub member_nickname: Option<String>,
    pub member_level: Option<String>,
    pub member_exp_over_level: Option<String>,
    pub player_bet: String,
    pub player_status: String,
}

impl Keyed for PlayerRecord {
    type Key = i64;

    fn key(&self) -> i64 {
        self.player_id
    }
}

impl JoinRow for PlayerCardRow {
    type Parent = PlayerRecord;

    fn split(self) -> (PlayerRecord, Vec<CardRow>) {
        let card = CardRow::from_columns(self.card_number, self.suit);
        (
            PlayerRecord {
                player_id: self.player_id,
                game_id: self.game_id,
                member_id: self.member_id,
                member_nickname: self.member_nickname,
                member_level: self.member_level,
                member_exp_over_level: self.member_exp_over_level,
                player_bet: self.player_bet,
                player_status: self.player_status,
            },
            card.into_iter().collect(),
        )
    }
}

pub type PlayerWithCards = Merged<PlayerRecord>;

#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub member_id: Option<i64>,
    pub player_bet: String,
    pub status: PlayerStatus,
    pub cards: Vec<Card>,
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<PlayerWithCards>, DomainError> {
    let rows = players_adapter::rows_by_game(conn, game_id).await?;
    debug!(game_id, rows = rows.len(), "players fetched");
    Ok(merge_rows(rows))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Option<PlayerWithCards>, DomainError> {
    let rows = players_adapter::rows_by_id(conn, game_id, player_id).await?;
    expect_at_most_one(merge_rows(rows))
}

/// Seat a player in a game and deal its hand. Returns the new player id.
pub async fn create(
    txn: &DatabaseTransaction,
    game_id: i64,
    new: NewPlayer,
) -> Result<i64, DomainError> {
    let status_id = reference::status_id(txn, new.status).await?;
    let card_ids = reference::card_ids(txn, &new.cards).await?;

    let player = players_adapter::create_player(
        txn,
        PlayerCreate {
            game_id,
            member_id: new.member_id,
            player_bet: new.player_bet,
            status_id,
        },
    )
    .await?;

    if !card_ids.is_empty() {
        players_adapter::replace_player_cards(txn, player.player_id, &card_ids).await?;
    }
    debug!(game_id, player_id = player.player_id, "player created");
    Ok(player.player_id)
}

/// Apply a patch. The hand, when supplied, is replaced before any column is
/// touched; an empty change set is a successful no-op.
pub async fn patch(
    txn: &DatabaseTransaction,
    player_id: i64,
    changes: ChangeSet<players::Column>,
) -> Result<bool, DomainError> {
    if let Some(cards) = changes.cards.into_option() {
        let card_ids = reference::card_ids(txn, &cards).await?;
        players_adapter::replace_player_cards(txn, player_id, &card_ids).await?;
    }

    if changes.fields.is_empty() {
        return Ok(true);
    }

    let values = reference::resolve_fields(txn, changes.fields).await?;
    let updated = players_adapter::update_fields(txn, player_id, values).await?;
    Ok(updated > 0)
}

/// Delete a player and its cards. Returns false when the game has no such player.
pub async fn delete(
    txn: &DatabaseTransaction,
    game_id: i64,
    player_id: i64,
) -> Result<bool, DomainError> {
    let removed = players_adapter::delete_player_cascade(txn, game_id, player_id).await?;
    Ok(removed > 0)
}
