#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a JSON body, failing with the raw text when it is not JSON.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "expected JSON body, got: {}",
            String::from_utf8_lossy(&body)
        )
    })
}

/// `{ "data": { "type": kind, "attributes": attributes } }`
pub fn document(kind: &str, attributes: Value) -> Value {
    serde_json::json!({ "data": { "type": kind, "attributes": attributes } })
}

/// Card list in wire shape from `(number, suit)` pairs.
pub fn cards(pairs: &[(&str, &str)]) -> Value {
    Value::Array(
        pairs
            .iter()
            .map(|(n, s)| serde_json::json!({ "cardNumber": n, "cardSuit": s }))
            .collect(),
    )
}
