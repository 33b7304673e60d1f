//! Player HTTP routes, nested under their game.

use actix_web::http::header::LOCATION;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{GameId, PlayerId, ValidatedJson};
use crate::protocol::jsonapi::RequestDocument;
use crate::protocol::players::{serialize_player, serialize_players, PLAYER_TYPE};
use crate::services::players::PlayerService;
use crate::state::app_state::AppState;

/// GET /v1/games/{game_id}/players
async fn list_players(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = game_id.0;

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let players = PlayerService::new().list(txn, game_id).await?;
            Ok(serialize_players(&players, game_id)?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(doc))
}

/// POST /v1/games/{game_id}/players
async fn create_player(
    http_req: HttpRequest,
    game_id: GameId,
    body: ValidatedJson<RequestDocument>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = game_id.0;
    let attributes = body.into_inner().into_attributes(PLAYER_TYPE)?;

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let player = PlayerService::new()
                .create(txn, game_id, attributes)
                .await?;
            Ok(serialize_player(&player)?)
        })
    })
    .await?;

    Ok(HttpResponse::Created()
        .insert_header((LOCATION, doc.data.links.self_link.clone()))
        .json(doc))
}

/// GET /v1/games/{game_id}/players/{player_id}
async fn get_player(
    http_req: HttpRequest,
    game_id: GameId,
    player_id: PlayerId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (game_id, player_id) = (game_id.0, player_id.0);

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let player = PlayerService::new().get(txn, game_id, player_id).await?;
            Ok(serialize_player(&player)?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(doc))
}

/// PATCH /v1/games/{game_id}/players/{player_id}
///
/// `playerCards` replaces the whole hand; `[]` empties it.
async fn patch_player(
    http_req: HttpRequest,
    game_id: GameId,
    player_id: PlayerId,
    body: ValidatedJson<RequestDocument>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (game_id, player_id) = (game_id.0, player_id.0);
    let attributes = body.into_inner().into_attributes(PLAYER_TYPE)?;

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let player = PlayerService::new()
                .patch(txn, game_id, player_id, attributes)
                .await?;
            Ok(serialize_player(&player)?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(doc))
}

/// DELETE /v1/games/{game_id}/players/{player_id}
async fn delete_player(
    http_req: HttpRequest,
    game_id: GameId,
    player_id: PlayerId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (game_id, player_id) = (game_id.0, player_id.0);

    with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            PlayerService::new().delete(txn, game_id, player_id).await?;
            Ok(())
        })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/games/{game_id}/players")
            .route(web::get().to(list_players))
            .route(web::post().to(create_player)),
    );
    cfg.service(
        web::resource("/games/{game_id}/players/{player_id}")
            .route(web::get().to(get_player))
            .route(web::patch().to(patch_player))
            .route(web::delete().to(delete_player)),
    );
}
