//! Member HTTP routes.

use actix_web::http::header::LOCATION;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{MemberId, ValidatedJson};
use crate::protocol::games::{serialize_games, GameQuery};
use crate::protocol::jsonapi::RequestDocument;
use crate::protocol::members::{
    member_path, serialize_member, serialize_members, MemberQuery, MEMBER_TYPE,
};
use crate::services::games::GameService;
use crate::services::members::MemberService;
use crate::state::app_state::AppState;

/// GET /v1/members?memberNickname=&memberEmail=
async fn list_members(
    http_req: HttpRequest,
    query: web::Query<MemberQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let members = MemberService::new().list(txn, &query).await?;
            Ok(serialize_members(&members, &query)?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(doc))
}

/// POST /v1/members
async fn create_member(
    http_req: HttpRequest,
    body: ValidatedJson<RequestDocument>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let attributes = body.into_inner().into_attributes(MEMBER_TYPE)?;

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let member = MemberService::new().create(txn, attributes).await?;
            Ok(serialize_member(&member)?)
        })
    })
    .await?;

    Ok(HttpResponse::Created()
        .insert_header((LOCATION, doc.data.links.self_link.clone()))
        .json(doc))
}

/// GET /v1/members/{member_id}
async fn get_member(
    http_req: HttpRequest,
    member_id: MemberId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = member_id.0;

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let member = MemberService::new().get(txn, id).await?;
            Ok(serialize_member(&member)?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(doc))
}

/// PATCH /v1/members/{member_id}
async fn patch_member(
    http_req: HttpRequest,
    member_id: MemberId,
    body: ValidatedJson<RequestDocument>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = member_id.0;
    let attributes = body.into_inner().into_attributes(MEMBER_TYPE)?;

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let member = MemberService::new().patch(txn, id, attributes).await?;
            Ok(serialize_member(&member)?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(doc))
}

/// DELETE /v1/members/{member_id}
///
/// Removes the member's seats and their cards in the same transaction.
async fn delete_member(
    http_req: HttpRequest,
    member_id: MemberId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = member_id.0;

    with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            MemberService::new().delete(txn, id).await?;
            Ok(())
        })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /v1/members/{member_id}/games
async fn list_member_games(
    http_req: HttpRequest,
    member_id: MemberId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = member_id.0;

    let doc = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let games = GameService::new().list_by_member(txn, id).await?;
            let self_path = format!("{}/games", member_path(id));
            Ok(serialize_games(&games, &GameQuery::default(), &self_path)?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(doc))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/members")
            .route(web::get().to(list_members))
            .route(web::post().to(create_member)),
    );
    cfg.service(
        web::resource("/members/{member_id}")
            .route(web::get().to(get_member))
            .route(web::patch().to(patch_member))
            .route(web::delete().to(delete_member)),
    );
    cfg.service(
        web::resource("/members/{member_id}/games").route(web::get().to(list_member_games)),
    );
}
