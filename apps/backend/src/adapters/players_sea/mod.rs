//! SeaORM adapter for the players repository.

use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, JoinType,
    NotSet, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set, Value,
};

use crate::entities::{card_numbers, card_suits, cards, members, player_cards, players, statuses};

pub mod dto;

pub use dto::{PlayerCardRow, PlayerCreate};

/// Players with their member (if any), status text and every held card.
/// Ordered by player, then deal order.
fn player_rows() -> Select<players::Entity> {
    players::Entity::find()
        .select_only()
        .column(players::Column::PlayerId)
        .column(players::Column::GameId)
        .column(players::Column::MemberId)
        .column(members::Column::MemberNickname)
        .column(members::Column::MemberLevel)
        .column(members::Column::MemberExpOverLevel)
        .column(players::Column::PlayerBet)
        .column_as(statuses::Column::Status, "player_status")
        .column(card_numbers::Column::CardNumber)
        .column(card_suits::Column::Suit)
        .join(JoinType::LeftJoin, players::Relation::Member.def())
        .join(JoinType::InnerJoin, players::Relation::Status.def())
        .join(JoinType::LeftJoin, player_cards::Relation::Player.def().rev())
        .join(JoinType::LeftJoin, player_cards::Relation::Card.def())
        .join(JoinType::LeftJoin, cards::Relation::CardNumber.def())
        .join(JoinType::LeftJoin, cards::Relation::CardSuit.def())
        .order_by_asc(players::Column::PlayerId)
        .order_by_asc(player_cards::Column::PlayerCardId)
}

pub async fn rows_by_game<C: ConnectionTrait>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<PlayerCardRow>, sea_orm::DbErr> {
    player_rows()
        .filter(players::Column::GameId.eq(game_id))
        .into_model::<PlayerCardRow>()
        .all(conn)
        .await
}

pub async fn rows_by_id<C: ConnectionTrait>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Vec<PlayerCardRow>, sea_orm::DbErr> {
    player_rows()
        .filter(players::Column::GameId.eq(game_id))
        .filter(players::Column::PlayerId.eq(player_id))
        .into_model::<PlayerCardRow>()
        .all(conn)
        .await
}

pub async fn create_player(
    txn: &DatabaseTransaction,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    players::ActiveModel {
        player_id: NotSet,
        member_id: Set(dto.member_id),
        game_id: Set(dto.game_id),
        player_bet: Set(dto.player_bet),
        status_id: Set(dto.status_id),
    }
    .insert(txn)
    .await
}

pub async fn update_fields(
    txn: &DatabaseTransaction,
    player_id: i64,
    changes: Vec<(players::Column, Value)>,
) -> Result<u64, sea_orm::DbErr> {
    let mut update =
        players::Entity::update_many().filter(players::Column::PlayerId.eq(player_id));
    for (column, value) in changes {
        update = update.col_expr(column, Expr::value(value));
    }
    Ok(update.exec(txn).await?.rows_affected)
}

/// Replace a player's hand; `card_ids` order becomes deal order.
pub async fn replace_player_cards(
    txn: &DatabaseTransaction,
    player_id: i64,
    card_ids: &[i64],
) -> Result<(), sea_orm::DbErr> {
    player_cards::Entity::delete_many()
        .filter(player_cards::Column::PlayerId.eq(player_id))
        .exec(txn)
        .await?;

    for card_id in card_ids {
        player_cards::ActiveModel {
            player_card_id: NotSet,
            player_id: Set(player_id),
            card_id: Set(*card_id),
        }
        .insert(txn)
        .await?;
    }
    Ok(())
}

/// Delete a player and its cards. Returns the number of player rows removed.
pub async fn delete_player_cascade(
    txn: &DatabaseTransaction,
    game_id: i64,
    player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let seat = Query::select()
        .column(players::Column::PlayerId)
        .from(players::Entity)
        .and_where(Expr::col(players::Column::PlayerId).eq(player_id))
        .and_where(Expr::col(players::Column::GameId).eq(game_id))
        .to_owned();

    player_cards::Entity::delete_many()
        .filter(player_cards::Column::PlayerId.in_subquery(seat))
        .exec(txn)
        .await?;

    let res = players::Entity::delete_many()
        .filter(players::Column::PlayerId.eq(player_id))
        .filter(players::Column::GameId.eq(game_id))
        .exec(txn)
        .await?;
    Ok(res.rows_affected)
}
