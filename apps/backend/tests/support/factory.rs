//! Seed data written straight through the repositories.

use backend_test_support::unique_helpers::{unique_email, unique_str};
use cardroom_backend::domain::{Card, PlayerStatus, Round};
use cardroom_backend::repos::games::{self, NewGame};
use cardroom_backend::repos::members::{self, Member, NewMember};
use cardroom_backend::repos::players::{self, NewPlayer};
use cardroom_backend::DomainError;
use sea_orm::DatabaseTransaction;

pub async fn create_member(txn: &DatabaseTransaction, prefix: &str) -> Result<Member, DomainError> {
    members::create(
        txn,
        NewMember {
            nickname: unique_str(prefix),
            email: unique_email(prefix),
            level: None,
            exp_over_level: None,
        },
    )
    .await
}

pub async fn create_game(
    txn: &DatabaseTransaction,
    round: Round,
    table_cards: Vec<Card>,
) -> Result<i64, DomainError> {
    games::create(
        txn,
        NewGame {
            round,
            minimum_bet: "100".into(),
            maximum_bet: "200".into(),
            bet_pool: "1000".into(),
            table_cards,
        },
    )
    .await
}

pub async fn seat(
    txn: &DatabaseTransaction,
    game_id: i64,
    member_id: Option<i64>,
    cards: Vec<Card>,
) -> Result<i64, DomainError> {
    players::create(
        txn,
        game_id,
        NewPlayer {
            member_id,
            player_bet: "0".into(),
            status: PlayerStatus::Checked,
            cards,
        },
    )
    .await
}
