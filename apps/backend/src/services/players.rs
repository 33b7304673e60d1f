//! Player domain service.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde_json::{Map, Value};
use tracing::info;

use super::games::game_not_found;
use super::{id_value, optional_integer, reject_unknown, supplied};
use crate::domain::PlayerStatus;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::repos::attributes::{parse_attributes, parse_cards, PLAYER_ATTRIBUTES, PLAYER_CARDS};
use crate::repos::players::{self, NewPlayer, PlayerWithCards};
use crate::repos::{games, members};

const CREATE_ATTRIBUTES: [&str; 4] = ["memberId", "playerBet", "playerStatus", PLAYER_CARDS];

fn player_not_found(game_id: i64, player_id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Player,
        format!("A player with ID {player_id} was not found in game {game_id}"),
    )
}

/// Player domain service.
pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Vec<PlayerWithCards>, DomainError> {
        if !games::exists(conn, game_id).await? {
            return Err(game_not_found(game_id));
        }
        players::list(conn, game_id).await
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
        player_id: i64,
    ) -> Result<PlayerWithCards, DomainError> {
        players::find_by_id(conn, game_id, player_id)
            .await?
            .ok_or_else(|| player_not_found(game_id, player_id))
    }

    /// Seat a player. Bet defaults to 0 and status to `checked`; a seat may
    /// be created without a member.
    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        attributes: Map<String, Value>,
    ) -> Result<PlayerWithCards, DomainError> {
        reject_unknown(&attributes, &CREATE_ATTRIBUTES)?;
        if !games::exists(txn, game_id).await? {
            return Err(game_not_found(game_id));
        }

        let member_id = supplied(&attributes, "memberId")
            .map(|v| id_value("memberId", v))
            .transpose()?;
        if let Some(id) = member_id {
            if !members::all_exist(txn, &[id]).await? {
                return Err(DomainError::validation(
                    ValidationKind::UnknownMembers,
                    format!("Member {id} does not exist"),
                ));
            }
        }

        let status = match supplied(&attributes, "playerStatus") {
            Some(Value::String(s)) => s.parse::<PlayerStatus>()?,
            Some(_) => {
                return Err(DomainError::validation_other("playerStatus must be a string"))
            }
            None => PlayerStatus::Checked,
        };

        let new = NewPlayer {
            member_id,
            player_bet: optional_integer(&attributes, "playerBet")?
                .unwrap_or_else(|| "0".to_string()),
            status,
            cards: supplied(&attributes, PLAYER_CARDS)
                .map(parse_cards)
                .transpose()?
                .unwrap_or_default(),
        };
        let player_id = players::create(txn, game_id, new).await?;
        info!(game_id, player_id, "player seated");

        players::find_by_id(txn, game_id, player_id)
            .await?
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::ContractViolation,
                    format!("Player {player_id} was not readable after insert"),
                )
            })
    }

    pub async fn patch(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        player_id: i64,
        attributes: Map<String, Value>,
    ) -> Result<PlayerWithCards, DomainError> {
        let changes = parse_attributes(&attributes, &PLAYER_ATTRIBUTES, Some(PLAYER_CARDS))?;

        self.get(txn, game_id, player_id).await?;
        if !players::patch(txn, player_id, changes).await? {
            return Err(player_not_found(game_id, player_id));
        }
        self.get(txn, game_id, player_id).await
    }

    pub async fn delete(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        player_id: i64,
    ) -> Result<(), DomainError> {
        if !players::delete(txn, game_id, player_id).await? {
            return Err(player_not_found(game_id, player_id));
        }
        info!(game_id, player_id, "player removed");
        Ok(())
    }
}

impl Default for PlayerService {
    fn default() -> Self {
        Self::new()
    }
}
