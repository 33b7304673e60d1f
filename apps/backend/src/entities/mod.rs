pub mod card_numbers;
pub mod card_suits;
pub mod cards;
pub mod games;
pub mod members;
pub mod player_cards;
pub mod players;
pub mod rounds;
pub mod statuses;
pub mod table_cards;

pub use games::Entity as Games;
pub use members::Entity as Members;
pub use players::Entity as Players;
