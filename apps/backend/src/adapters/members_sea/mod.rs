//! SeaORM adapter for the members repository.

use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, Value,
};

use crate::entities::{members, player_cards, players};

pub mod dto;

pub use dto::{MemberCreate, MemberFilter};

pub async fn list<C: ConnectionTrait>(
    conn: &C,
    filter: &MemberFilter,
) -> Result<Vec<members::Model>, sea_orm::DbErr> {
    let mut query = members::Entity::find();
    if let Some(nickname) = &filter.nickname {
        query = query.filter(members::Column::MemberNickname.eq(nickname.as_str()));
    }
    if let Some(email) = &filter.email {
        query = query.filter(members::Column::MemberEmail.eq(email.as_str()));
    }
    query
        .order_by_asc(members::Column::MemberId)
        .all(conn)
        .await
}

pub async fn rows_by_id<C: ConnectionTrait>(
    conn: &C,
    member_id: i64,
) -> Result<Vec<members::Model>, sea_orm::DbErr> {
    members::Entity::find()
        .filter(members::Column::MemberId.eq(member_id))
        .all(conn)
        .await
}

/// How many of `member_ids` (already de-duplicated) exist.
pub async fn count_existing<C: ConnectionTrait>(
    conn: &C,
    member_ids: &[i64],
) -> Result<u64, sea_orm::DbErr> {
    members::Entity::find()
        .filter(members::Column::MemberId.is_in(member_ids.iter().copied()))
        .count(conn)
        .await
}

pub async fn create_member(
    txn: &DatabaseTransaction,
    dto: MemberCreate,
) -> Result<members::Model, sea_orm::DbErr> {
    members::ActiveModel {
        member_id: NotSet,
        member_nickname: Set(dto.nickname),
        member_email: Set(dto.email),
        member_level: Set(dto.level),
        member_exp_over_level: Set(dto.exp_over_level),
    }
    .insert(txn)
    .await
}

pub async fn update_fields(
    txn: &DatabaseTransaction,
    member_id: i64,
    changes: Vec<(members::Column, Value)>,
) -> Result<u64, sea_orm::DbErr> {
    let mut update =
        members::Entity::update_many().filter(members::Column::MemberId.eq(member_id));
    for (column, value) in changes {
        update = update.col_expr(column, Expr::value(value));
    }
    Ok(update.exec(txn).await?.rows_affected)
}

/// Delete a member with every seat it holds and the cards in those seats.
/// Returns the number of member rows removed.
pub async fn delete_member_cascade(
    txn: &DatabaseTransaction,
    member_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let seats = Query::select()
        .column(players::Column::PlayerId)
        .from(players::Entity)
        .and_where(Expr::col(players::Column::MemberId).eq(member_id))
        .to_owned();

    player_cards::Entity::delete_many()
        .filter(player_cards::Column::PlayerId.in_subquery(seats))
        .exec(txn)
        .await?;

    players::Entity::delete_many()
        .filter(players::Column::MemberId.eq(member_id))
        .exec(txn)
        .await?;

    let res = members::Entity::delete_by_id(member_id).exec(txn).await?;
    Ok(res.rows_affected)
}
