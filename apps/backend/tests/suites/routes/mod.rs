use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use serde_json::Value;

use crate::common::{document, read_json};

pub mod errors;
pub mod games;
pub mod health;
pub mod players;

/// POST a JSON:API document and return the response.
pub async fn post<S>(app: &S, uri: &str, body: Value) -> ServiceResponse<BoxBody>
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    test::call_service(app, req).await
}

pub async fn patch<S>(app: &S, uri: &str, body: Value) -> ServiceResponse<BoxBody>
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::patch().uri(uri).set_json(body).to_request();
    test::call_service(app, req).await
}

pub async fn get<S>(app: &S, uri: &str) -> ServiceResponse<BoxBody>
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    test::call_service(app, test::TestRequest::get().uri(uri).to_request()).await
}

pub async fn delete<S>(app: &S, uri: &str) -> ServiceResponse<BoxBody>
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    test::call_service(app, test::TestRequest::delete().uri(uri).to_request()).await
}

/// Create a member through the API and return its numeric id.
pub async fn new_member<S>(app: &S, nickname: &str, email: &str) -> i64
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = post(
        app,
        "/v1/members",
        document(
            "member",
            serde_json::json!({ "memberNickname": nickname, "memberEmail": email }),
        ),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 201);
    resource_id(&read_json(resp).await)
}

/// `data.id` of a single-resource document, as a number.
pub fn resource_id(doc: &Value) -> i64 {
    doc["data"]["id"]
        .as_str()
        .and_then(|id| id.parse().ok())
        .unwrap_or_else(|| panic!("document has no numeric data.id: {doc}"))
}
