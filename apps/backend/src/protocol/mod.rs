//! JSON:API wire types and the serializers that build them from merged rows.

pub mod games;
pub mod jsonapi;
pub mod members;
pub mod players;
