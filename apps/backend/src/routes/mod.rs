use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod games;
pub mod health;
pub mod members;
pub mod players;

/// Register every route: `/health` plus the versioned API under `/v1`.
///
/// Shared by `main.rs` and the integration tests so both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query string: {err}")).into()
    }));

    cfg.configure(health::configure_routes);

    cfg.service(
        web::scope("/v1")
            .configure(games::configure_routes)
            .configure(players::configure_routes)
            .configure(members::configure_routes),
    );
}
