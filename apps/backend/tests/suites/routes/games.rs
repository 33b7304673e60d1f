use actix_web::http::StatusCode;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use cardroom_backend::AppError;
use serde_json::json;

use super::{get, new_member, patch, post, resource_id};
use crate::common::{cards, document, read_json};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn create_then_get_game() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;

    let resp = post(
        &app,
        "/v1/games",
        document(
            "game",
            json!({
                "round": "flop",
                "minimumBet": 100,
                "maximumBet": 200,
                "betPool": 1000,
                "tableCards": cards(&[("Q", "hearts"), ("2", "clubs"), ("10", "spades")])
            }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    let id = resource_id(&created);

    let fetched = read_json(get(&app, &format!("/v1/games/{id}")).await).await;
    assert_eq!(fetched, created);
    assert_eq!(
        fetched,
        json!({
            "links": { "self": format!("/v1/games/{id}") },
            "data": {
                "type": "game",
                "id": id.to_string(),
                "links": { "self": format!("/v1/games/{id}") },
                "attributes": {
                    "round": "flop",
                    "minimumBet": 100,
                    "maximumBet": 200,
                    "betPool": 1000,
                    "tableCards": [
                        { "cardNumber": "Q", "cardSuit": "hearts" },
                        { "cardNumber": "2", "cardSuit": "clubs" },
                        { "cardNumber": "10", "cardSuit": "spades" }
                    ]
                }
            }
        })
    );
    Ok(())
}

#[actix_web::test]
async fn list_games_with_round_filter() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;

    for round in ["blind", "river", "blind"] {
        let resp = post(
            &app,
            "/v1/games",
            document("game", json!({ "round": round, "minimumBet": 1, "maximumBet": 2 })),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let all = read_json(get(&app, "/v1/games").await).await;
    assert_eq!(all["links"]["self"], "/v1/games");
    assert_eq!(all["data"].as_array().map(Vec::len), Some(3));
    assert_eq!(all["data"][0]["attributes"]["betPool"], 0);
    assert_eq!(all["data"][0]["attributes"]["tableCards"], json!([]));

    let blind = read_json(get(&app, "/v1/games?round=blind").await).await;
    let data = blind["data"].as_array().expect("data array");
    assert_eq!(data.len(), 2);
    assert!(data.iter().all(|g| g["attributes"]["round"] == "blind"));

    let resp = get(&app, "/v1/games?round=preflop").await;
    assert_problem_details_from_service_response(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST)
        .await;
    Ok(())
}

#[actix_web::test]
async fn blank_query_parameters_do_not_filter() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;
    new_member(&app, "A", "a@example.test").await;
    for round in ["blind", "river"] {
        let resp = post(
            &app,
            "/v1/games",
            document("game", json!({ "round": round, "minimumBet": 1, "maximumBet": 2 })),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let games = read_json(get(&app, "/v1/games?round=").await).await;
    assert_eq!(games["data"].as_array().map(Vec::len), Some(2));

    for uri in [
        "/v1/members?memberNickname=",
        "/v1/members?memberEmail=",
        "/v1/members?memberNickname=&memberEmail=",
    ] {
        let members = read_json(get(&app, uri).await).await;
        assert_eq!(members["data"].as_array().map(Vec::len), Some(1), "{uri}");
    }
    Ok(())
}

#[actix_web::test]
async fn create_game_seats_members() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;
    let a = new_member(&app, "A", "a@example.test").await;
    let b = new_member(&app, "B", "b@example.test").await;

    let resp = post(
        &app,
        "/v1/games",
        document(
            "game",
            json!({ "round": "blind", "minimumBet": 1, "maximumBet": 2, "memberIds": [a, b] }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let game = resource_id(&read_json(resp).await);

    let players = read_json(get(&app, &format!("/v1/games/{game}/players")).await).await;
    let data = players["data"].as_array().expect("data array");
    assert_eq!(data.len(), 2);
    for (seat, member) in data.iter().zip([a, b]) {
        assert_eq!(seat["attributes"]["memberId"], member.to_string());
        assert_eq!(seat["attributes"]["playerBet"], 0);
        assert_eq!(seat["attributes"]["playerStatus"], "checked");
        assert_eq!(seat["attributes"]["playerCards"], json!([]));
    }
    Ok(())
}

#[actix_web::test]
async fn create_game_rejects_bad_member_ids() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;
    let a = new_member(&app, "A", "a@example.test").await;

    let resp = post(
        &app,
        "/v1/games",
        document(
            "game",
            json!({ "round": "blind", "minimumBet": 1, "maximumBet": 2, "memberIds": [a, a] }),
        ),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "DUPLICATE_MEMBER_IDS",
        StatusCode::BAD_REQUEST,
    )
    .await;

    let resp = post(
        &app,
        "/v1/games",
        document(
            "game",
            json!({ "round": "blind", "minimumBet": 1, "maximumBet": 2, "memberIds": [a, a + 50] }),
        ),
    )
    .await;
    assert_problem_details_from_service_response(resp, "UNKNOWN_MEMBERS", StatusCode::BAD_REQUEST)
        .await;

    // Neither attempt created a game.
    let all = read_json(get(&app, "/v1/games").await).await;
    assert_eq!(all["data"], json!([]));
    Ok(())
}

#[actix_web::test]
async fn patch_game_round_and_table_cards() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;

    let resp = post(
        &app,
        "/v1/games",
        document(
            "game",
            json!({
                "round": "flop",
                "minimumBet": 100,
                "maximumBet": 200,
                "tableCards": cards(&[("2", "spades"), ("3", "spades"), ("4", "spades")])
            }),
        ),
    )
    .await;
    let id = resource_id(&read_json(resp).await);

    let resp = patch(
        &app,
        &format!("/v1/games/{id}"),
        document(
            "game",
            json!({
                "round": "turn",
                "betPool": 0,
                "maximumBet": null,
                "tableCards": cards(&[("2", "spades"), ("3", "spades"), ("4", "spades"), ("K", "diamonds")])
            }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let attrs = read_json(resp).await["data"]["attributes"].clone();
    assert_eq!(attrs["round"], "turn");
    assert_eq!(attrs["betPool"], 0);
    assert_eq!(attrs["maximumBet"], 200);
    assert_eq!(attrs["tableCards"].as_array().map(Vec::len), Some(4));
    assert_eq!(attrs["tableCards"][3], json!({ "cardNumber": "K", "cardSuit": "diamonds" }));

    let resp = patch(
        &app,
        &format!("/v1/games/{id}"),
        document("game", json!({ "tableCards": [] })),
    )
    .await;
    let attrs = read_json(resp).await["data"]["attributes"].clone();
    assert_eq!(attrs["tableCards"], json!([]));
    assert_eq!(attrs["round"], "turn");
    Ok(())
}

#[actix_web::test]
async fn empty_patch_returns_current_state() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;

    let resp = post(
        &app,
        "/v1/games",
        document("game", json!({ "round": "river", "minimumBet": 1, "maximumBet": 2 })),
    )
    .await;
    let created = read_json(resp).await;
    let id = resource_id(&created);

    let resp = patch(&app, &format!("/v1/games/{id}"), document("game", json!({}))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, created);
    Ok(())
}
