use actix_web::test;
use cardroom_backend::AppError;

use crate::common::read_json;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn health_reports_database_and_migrations() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("x-trace-id"));

    let body = read_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_ne!(body["migrations"], "unknown");
    assert!(body.get("db_error").is_none());
    Ok(())
}
