//! Game domain service.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde_json::{Map, Value};
use tracing::info;

use super::{id_value, optional_integer, reject_unknown, required_text, supplied};
use crate::domain::{PlayerStatus, Round};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::protocol::games::GameQuery;
use crate::repos::attributes::{
    integer_text, parse_attributes, parse_cards, GAME_ATTRIBUTES, TABLE_CARDS,
};
use crate::repos::games::{self, GameFilter, GameWithCards, NewGame};
use crate::repos::players::{self, NewPlayer};
use crate::repos::{has_duplicates, members};

const MEMBER_IDS: &str = "memberIds";

const CREATE_ATTRIBUTES: [&str; 6] = [
    "round",
    "minimumBet",
    "maximumBet",
    "betPool",
    TABLE_CARDS,
    MEMBER_IDS,
];

pub(crate) fn game_not_found(game_id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Game,
        format!("A game with ID {game_id} was not found"),
    )
}

fn member_ids(attributes: &Map<String, Value>) -> Result<Vec<i64>, DomainError> {
    match supplied(attributes, MEMBER_IDS) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(|v| id_value(MEMBER_IDS, v)).collect(),
        Some(_) => Err(DomainError::validation_other(
            "memberIds must be a list of member ids",
        )),
    }
}

fn required_integer(attributes: &Map<String, Value>, name: &str) -> Result<String, DomainError> {
    match supplied(attributes, name) {
        Some(v) => integer_text(name, v),
        None => Err(DomainError::validation_other(format!("{name} is required"))),
    }
}

/// Game domain service.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        query: &GameQuery,
    ) -> Result<Vec<GameWithCards>, DomainError> {
        let round = query.round().map(str::parse::<Round>).transpose()?;
        games::list(conn, &GameFilter { round }).await
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<GameWithCards, DomainError> {
        games::find_by_id(conn, game_id)
            .await?
            .ok_or_else(|| game_not_found(game_id))
    }

    /// Create a game, deal its table cards and seat every listed member.
    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        attributes: Map<String, Value>,
    ) -> Result<GameWithCards, DomainError> {
        reject_unknown(&attributes, &CREATE_ATTRIBUTES)?;

        let member_ids = member_ids(&attributes)?;
        if has_duplicates(&member_ids) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateMemberIds,
                "memberIds contains duplicate ids",
            ));
        }
        if !members::all_exist(txn, &member_ids).await? {
            return Err(DomainError::validation(
                ValidationKind::UnknownMembers,
                "One or more memberIds do not refer to existing members",
            ));
        }

        let new = NewGame {
            round: required_text(&attributes, "round")?.parse()?,
            minimum_bet: required_integer(&attributes, "minimumBet")?,
            maximum_bet: required_integer(&attributes, "maximumBet")?,
            bet_pool: optional_integer(&attributes, "betPool")?.unwrap_or_else(|| "0".to_string()),
            table_cards: supplied(&attributes, TABLE_CARDS)
                .map(parse_cards)
                .transpose()?
                .unwrap_or_default(),
        };
        let game_id = games::create(txn, new).await?;

        for member_id in &member_ids {
            players::create(
                txn,
                game_id,
                NewPlayer {
                    member_id: Some(*member_id),
                    player_bet: "0".to_string(),
                    status: PlayerStatus::Checked,
                    cards: Vec::new(),
                },
            )
            .await?;
        }
        info!(game_id, seats = member_ids.len(), "game created");

        games::find_by_id(txn, game_id).await?.ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::ContractViolation,
                format!("Game {game_id} was not readable after insert"),
            )
        })
    }

    pub async fn patch(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        attributes: Map<String, Value>,
    ) -> Result<GameWithCards, DomainError> {
        let changes = parse_attributes(&attributes, &GAME_ATTRIBUTES, Some(TABLE_CARDS))?;

        if !games::exists(txn, game_id).await? {
            return Err(game_not_found(game_id));
        }
        if !games::patch(txn, game_id, changes).await? {
            return Err(game_not_found(game_id));
        }
        self.get(txn, game_id).await
    }

    /// Games in which the member holds a seat.
    pub async fn list_by_member<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        member_id: i64,
    ) -> Result<Vec<GameWithCards>, DomainError> {
        if members::find_by_id(conn, member_id).await?.is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Member,
                format!("A member with ID {member_id} was not found"),
            ));
        }
        games::list_by_member(conn, member_id).await
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
