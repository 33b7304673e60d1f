use sea_orm::entity::prelude::*;

/// One of the 52 seeded cards; table and player cards reference these ids.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub card_id: i64,
    pub card_number_id: i64,
    pub card_suit_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::card_numbers::Entity",
        from = "Column::CardNumberId",
        to = "super::card_numbers::Column::CardNumberId"
    )]
    CardNumber,
    #[sea_orm(
        belongs_to = "super::card_suits::Entity",
        from = "Column::CardSuitId",
        to = "super::card_suits::Column::SuitId"
    )]
    CardSuit,
}

impl Related<super::card_numbers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardNumber.def()
    }
}

impl Related<super::card_suits::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardSuit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
