//! SeaORM adapters. Functions here return `sea_orm::DbErr`; repositories
//! map it to `DomainError`.

pub mod games_sea;
pub mod members_sea;
pub mod players_sea;
pub mod reference_sea;
