//! Lookups against the seeded reference tables.

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QuerySelect, RelationTrait,
};

use crate::entities::{card_numbers, card_suits, cards, rounds, statuses};

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CardIdRow {
    pub card_id: i64,
    pub card_number: String,
    pub suit: String,
}

/// Card ids for the given `(number, suit)` pairs. Pairs without a card are
/// simply absent from the result.
pub async fn find_cards<C: ConnectionTrait>(
    conn: &C,
    pairs: &[(&str, &str)],
) -> Result<Vec<CardIdRow>, sea_orm::DbErr> {
    let mut any = Condition::any();
    for (number, suit) in pairs {
        any = any.add(
            Condition::all()
                .add(card_numbers::Column::CardNumber.eq(*number))
                .add(card_suits::Column::Suit.eq(*suit)),
        );
    }

    cards::Entity::find()
        .select_only()
        .column(cards::Column::CardId)
        .column(card_numbers::Column::CardNumber)
        .column(card_suits::Column::Suit)
        .join(JoinType::InnerJoin, cards::Relation::CardNumber.def())
        .join(JoinType::InnerJoin, cards::Relation::CardSuit.def())
        .filter(any)
        .into_model::<CardIdRow>()
        .all(conn)
        .await
}

pub async fn round_id<C: ConnectionTrait>(
    conn: &C,
    round: &str,
) -> Result<Option<i64>, sea_orm::DbErr> {
    Ok(rounds::Entity::find()
        .filter(rounds::Column::Round.eq(round))
        .one(conn)
        .await?
        .map(|r| r.round_id))
}

pub async fn status_id<C: ConnectionTrait>(
    conn: &C,
    status: &str,
) -> Result<Option<i64>, sea_orm::DbErr> {
    Ok(statuses::Entity::find()
        .filter(statuses::Column::Status.eq(status))
        .one(conn)
        .await?
        .map(|s| s.status_id))
}
