pub mod game_id;
pub mod path_ids;
pub mod validated_json;

pub use game_id::GameId;
pub use path_ids::{MemberId, PlayerId};
pub use validated_json::ValidatedJson;
