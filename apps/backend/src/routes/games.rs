//! Game HTTP routes.

use actix_web::http::header::LOCATION;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{GameId, ValidatedJson};
use crate::protocol::games::{serialize_game, serialize_games, GameQuery, GAME_TYPE};
use crate::protocol::jsonapi::RequestDocument;
use crate::services::games::GameService;
use crate::state::app_state::AppState;

/// GET /v1/games?round=
async fn list_games(
    http_req: HttpRequest,
    query: web::Query<GameQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let games = GameService::new().list(txn, &query).await?;
            Ok(serialize_games(&games, &query, "/games")?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(doc))
}

/// POST /v1/games
///
/// Creates the game, its table cards and a seat for every id in `memberIds`.
async fn create_game(
    http_req: HttpRequest,
    body: ValidatedJson<RequestDocument>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let attributes = body.into_inner().into_attributes(GAME_TYPE)?;

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let game = GameService::new().create(txn, attributes).await?;
            Ok(serialize_game(&game)?)
        })
    })
    .await?;

    Ok(HttpResponse::Created()
        .insert_header((LOCATION, doc.data.links.self_link.clone()))
        .json(doc))
}

/// GET /v1/games/{game_id}
async fn get_game(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = game_id.0;

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let game = GameService::new().get(txn, id).await?;
            Ok(serialize_game(&game)?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(doc))
}

/// PATCH /v1/games/{game_id}
async fn patch_game(
    http_req: HttpRequest,
    game_id: GameId,
    body: ValidatedJson<RequestDocument>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = game_id.0;
    let attributes = body.into_inner().into_attributes(GAME_TYPE)?;

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let game = GameService::new().patch(txn, id, attributes).await?;
            Ok(serialize_game(&game)?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(doc))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/games")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    );
    cfg.service(
        web::resource("/games/{game_id}")
            .route(web::get().to(get_game))
            .route(web::patch().to(patch_game)),
    );
}
