//! Value types shared by repositories, serializers and handlers.

pub mod cards;
pub mod game;

pub use cards::{Card, CardNumber, Suit};
pub use game::{PlayerStatus, Round};
