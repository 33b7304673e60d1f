use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use cardroom_backend::AppError;
use serde_json::json;

use super::{delete, get, new_member, patch, post, resource_id};
use crate::common::{cards, document, read_json};
use crate::support::{build_test_state, create_test_app};

async fn new_game<S>(app: &S) -> i64
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let resp = post(
        app,
        "/v1/games",
        document("game", json!({ "round": "blind", "minimumBet": 10, "maximumBet": 20 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    resource_id(&read_json(resp).await)
}

#[actix_web::test]
async fn player_lifecycle() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;
    let game = new_game(&app).await;
    let member = new_member(&app, "Jack", "abc@efg.com").await;

    let resp = post(
        &app,
        &format!("/v1/games/{game}/players"),
        document(
            "player",
            json!({
                "memberId": member,
                "playerBet": 15,
                "playerStatus": "raised",
                "playerCards": cards(&[("A", "spades"), ("8", "hearts")])
            }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let created = read_json(resp).await;
    let player = resource_id(&created);
    let self_path = format!("/v1/games/{game}/players/{player}");
    assert_eq!(location.as_deref(), Some(self_path.as_str()));
    assert_eq!(
        created,
        json!({
            "links": { "self": self_path },
            "data": {
                "type": "player",
                "id": player.to_string(),
                "links": { "self": self_path },
                "attributes": {
                    "memberNickname": "Jack",
                    "memberId": member.to_string(),
                    "memberLevel": 1,
                    "memberExpOverLevel": 0,
                    "playerBet": 15,
                    "playerStatus": "raised",
                    "playerCards": [
                        { "cardNumber": "A", "cardSuit": "spades" },
                        { "cardNumber": "8", "cardSuit": "hearts" }
                    ]
                }
            }
        })
    );

    let resp = patch(
        &app,
        &self_path,
        document("player", json!({ "playerStatus": "folded", "playerCards": [] })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let attrs = read_json(resp).await["data"]["attributes"].clone();
    assert_eq!(attrs["playerStatus"], "folded");
    assert_eq!(attrs["playerBet"], 15);
    assert_eq!(attrs["playerCards"], json!([]));

    let listed = read_json(get(&app, &format!("/v1/games/{game}/players")).await).await;
    assert_eq!(listed["links"]["self"], format!("/v1/games/{game}/players"));
    assert_eq!(listed["data"].as_array().map(Vec::len), Some(1));

    let resp = delete(&app, &self_path).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get(&app, &self_path).await;
    assert_problem_details_from_service_response(resp, "PLAYER_NOT_FOUND", StatusCode::NOT_FOUND)
        .await;

    let resp = delete(&app, &self_path).await;
    assert_problem_details_from_service_response(resp, "PLAYER_NOT_FOUND", StatusCode::NOT_FOUND)
        .await;
    Ok(())
}

#[actix_web::test]
async fn memberless_seat_has_null_member_fields() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;
    let game = new_game(&app).await;

    let resp = post(&app, &format!("/v1/games/{game}/players"), document("player", json!({}))).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let attrs = read_json(resp).await["data"]["attributes"].clone();
    assert_eq!(attrs["memberNickname"], json!(null));
    assert_eq!(attrs["memberId"], json!(null));
    assert_eq!(attrs["memberLevel"], json!(null));
    assert_eq!(attrs["memberExpOverLevel"], json!(null));
    assert_eq!(attrs["playerBet"], 0);
    assert_eq!(attrs["playerStatus"], "checked");
    Ok(())
}

#[actix_web::test]
async fn player_routes_check_the_game() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;
    let game = new_game(&app).await;
    let other = new_game(&app).await;

    let resp = post(&app, &format!("/v1/games/{game}/players"), document("player", json!({}))).await;
    let player = resource_id(&read_json(resp).await);

    let resp = get(&app, "/v1/games/9999/players").await;
    assert_problem_details_from_service_response(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND)
        .await;

    // A player id from another game is not found under this one.
    let resp = get(&app, &format!("/v1/games/{other}/players/{player}")).await;
    assert_problem_details_from_service_response(resp, "PLAYER_NOT_FOUND", StatusCode::NOT_FOUND)
        .await;

    let resp = post(
        &app,
        &format!("/v1/games/{game}/players"),
        document("player", json!({ "memberId": 4242 })),
    )
    .await;
    assert_problem_details_from_service_response(resp, "UNKNOWN_MEMBERS", StatusCode::BAD_REQUEST)
        .await;
    Ok(())
}

#[actix_web::test]
async fn unknown_card_is_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;
    let game = new_game(&app).await;

    let resp = post(
        &app,
        &format!("/v1/games/{game}/players"),
        document("player", json!({ "playerCards": cards(&[("1", "spades")]) })),
    )
    .await;
    assert_problem_details_from_service_response(resp, "UNKNOWN_CARD", StatusCode::BAD_REQUEST)
        .await;

    let listed = read_json(get(&app, &format!("/v1/games/{game}/players")).await).await;
    assert_eq!(listed["data"], json!([]));
    Ok(())
}
