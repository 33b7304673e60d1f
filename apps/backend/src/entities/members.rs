use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub member_id: i64,
    #[sea_orm(unique)]
    pub member_nickname: String,
    #[sea_orm(unique)]
    pub member_email: String,
    pub member_level: String,
    pub member_exp_over_level: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
