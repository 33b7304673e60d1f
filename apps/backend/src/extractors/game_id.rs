use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use super::path_ids::positive_id;
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::games;
use crate::state::app_state::AppState;

/// Game ID extracted from the route path parameter.
/// Validates that the game exists in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let game_id = positive_id(&req, "game_id", ErrorCode::InvalidGameId)?;

            let app_state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
                AppError::internal(ErrorCode::Internal, "AppState not available")
            })?;

            // Runs on the pool before the handler opens its transaction
            let db = require_db(app_state)?;
            if !games::exists(db, game_id).await? {
                return Err(AppError::not_found(
                    ErrorCode::GameNotFound,
                    format!("A game with ID {game_id} was not found"),
                ));
            }

            Ok(GameId(game_id))
        })
    }
}
