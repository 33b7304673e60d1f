//! SeaORM adapter for the games repository.

use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, JoinType,
    NotSet, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
    Value,
};

use crate::entities::{card_numbers, card_suits, cards, games, players, rounds, table_cards};

pub mod dto;

pub use dto::{GameCardRow, GameCreate};

/// Games joined to their round and, through LEFT JOINs, to every table card.
/// Ordered by game, then deal order.
fn game_rows() -> Select<games::Entity> {
    games::Entity::find()
        .select_only()
        .column(games::Column::GameId)
        .column(rounds::Column::Round)
        .column(games::Column::MinimumBet)
        .column(games::Column::MaximumBet)
        .column(games::Column::BetPool)
        .column(card_numbers::Column::CardNumber)
        .column(card_suits::Column::Suit)
        .join(JoinType::InnerJoin, games::Relation::Round.def())
        .join(JoinType::LeftJoin, table_cards::Relation::Game.def().rev())
        .join(JoinType::LeftJoin, table_cards::Relation::Card.def())
        .join(JoinType::LeftJoin, cards::Relation::CardNumber.def())
        .join(JoinType::LeftJoin, cards::Relation::CardSuit.def())
        .order_by_asc(games::Column::GameId)
        .order_by_asc(table_cards::Column::TableCardId)
}

pub async fn list_rows<C: ConnectionTrait>(
    conn: &C,
    round: Option<&str>,
) -> Result<Vec<GameCardRow>, sea_orm::DbErr> {
    let mut query = game_rows();
    if let Some(round) = round {
        query = query.filter(rounds::Column::Round.eq(round));
    }
    query.into_model::<GameCardRow>().all(conn).await
}

pub async fn rows_by_id<C: ConnectionTrait>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<GameCardRow>, sea_orm::DbErr> {
    game_rows()
        .filter(games::Column::GameId.eq(game_id))
        .into_model::<GameCardRow>()
        .all(conn)
        .await
}

/// Rows for every game in which `member_id` holds a seat.
pub async fn rows_by_member<C: ConnectionTrait>(
    conn: &C,
    member_id: i64,
) -> Result<Vec<GameCardRow>, sea_orm::DbErr> {
    let seated_games = Query::select()
        .column(players::Column::GameId)
        .from(players::Entity)
        .and_where(Expr::col(players::Column::MemberId).eq(member_id))
        .to_owned();

    game_rows()
        .filter(games::Column::GameId.in_subquery(seated_games))
        .into_model::<GameCardRow>()
        .all(conn)
        .await
}

pub async fn exists<C: ConnectionTrait>(conn: &C, game_id: i64) -> Result<bool, sea_orm::DbErr> {
    let count = games::Entity::find_by_id(game_id).count(conn).await?;
    Ok(count > 0)
}

pub async fn create_game(
    txn: &DatabaseTransaction,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    games::ActiveModel {
        game_id: NotSet,
        round_id: Set(dto.round_id),
        minimum_bet: Set(dto.minimum_bet),
        maximum_bet: Set(dto.maximum_bet),
        bet_pool: Set(dto.bet_pool),
    }
    .insert(txn)
    .await
}

/// Apply `changes` to one game. Returns the number of rows updated.
pub async fn update_fields(
    txn: &DatabaseTransaction,
    game_id: i64,
    changes: Vec<(games::Column, Value)>,
) -> Result<u64, sea_orm::DbErr> {
    let mut update = games::Entity::update_many().filter(games::Column::GameId.eq(game_id));
    for (column, value) in changes {
        update = update.col_expr(column, Expr::value(value));
    }
    Ok(update.exec(txn).await?.rows_affected)
}

/// Replace the table cards of a game; `card_ids` order becomes deal order.
pub async fn replace_table_cards(
    txn: &DatabaseTransaction,
    game_id: i64,
    card_ids: &[i64],
) -> Result<(), sea_orm::DbErr> {
    table_cards::Entity::delete_many()
        .filter(table_cards::Column::GameId.eq(game_id))
        .exec(txn)
        .await?;

    for card_id in card_ids {
        table_cards::ActiveModel {
            table_card_id: NotSet,
            game_id: Set(game_id),
            card_id: Set(*card_id),
        }
        .insert(txn)
        .await?;
    }
    Ok(())
}
