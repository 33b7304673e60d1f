use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use cardroom_backend::AppError;
use serde_json::json;

use super::{get, patch, post};
use crate::common::document;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn missing_resources_are_404() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;

    let resp = get(&app, "/v1/games/77").await;
    assert_problem_details_from_service_response(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND)
        .await;

    let resp = get(&app, "/v1/members/77").await;
    assert_problem_details_from_service_response(resp, "MEMBER_NOT_FOUND", StatusCode::NOT_FOUND)
        .await;

    let resp = patch(&app, "/v1/members/77", document("member", json!({ "memberLevel": 2 }))).await;
    assert_problem_details_from_service_response(resp, "MEMBER_NOT_FOUND", StatusCode::NOT_FOUND)
        .await;
    Ok(())
}

#[actix_web::test]
async fn malformed_path_ids_are_400() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;

    for (uri, code) in [
        ("/v1/games/abc", "INVALID_GAME_ID"),
        ("/v1/games/0", "INVALID_GAME_ID"),
        ("/v1/members/-3", "INVALID_MEMBER_ID"),
    ] {
        let resp = get(&app, uri).await;
        assert_problem_details_from_service_response(resp, code, StatusCode::BAD_REQUEST).await;
    }
    Ok(())
}

#[actix_web::test]
async fn resource_type_must_match_route() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;

    let resp = post(
        &app,
        "/v1/members",
        document("game", json!({ "memberNickname": "x", "memberEmail": "x@example.test" })),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "RESOURCE_TYPE_MISMATCH",
        StatusCode::BAD_REQUEST,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn unknown_attribute_is_400() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;

    let resp = post(
        &app,
        "/v1/games",
        document(
            "game",
            json!({ "round": "blind", "minimumBet": 1, "maximumBet": 2, "dealer": "me" }),
        ),
    )
    .await;
    assert_problem_details_from_service_response(resp, "UNKNOWN_ATTRIBUTE", StatusCode::BAD_REQUEST)
        .await;
    Ok(())
}

#[actix_web::test]
async fn malformed_json_body_is_400() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/v1/members")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST)
        .await;
    Ok(())
}
