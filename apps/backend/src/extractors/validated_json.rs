//! Request body extractor for JSON:API documents.

use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Largest request document accepted.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

const ACCEPTED_MEDIA_TYPES: [&str; 2] = ["application/json", "application/vnd.api+json"];

/// A deserialized request body.
///
/// Every failure (wrong media type, oversized or unreadable body, bad JSON)
/// becomes a 400 problem response with code `BAD_REQUEST`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let media_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(media_type)
            .unwrap_or_default();
        let mut payload = payload.take();

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            if !ACCEPTED_MEDIA_TYPES.contains(&media_type.as_str()) {
                debug!(trace_id = %trace_id, content_type = %media_type, "rejected body media type");
                return Err(AppError::bad_request(
                    ErrorCode::BadRequest,
                    format!("Expected a JSON body, got content type '{media_type}'"),
                ));
            }

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_id, error = %e, "failed to read request body");
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                if body.len() + chunk.len() > MAX_BODY_BYTES {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        format!("Request body exceeds {MAX_BODY_BYTES} bytes"),
                    ));
                }
                body.extend_from_slice(&chunk);
            }

            serde_json::from_slice::<T>(&body)
                .map(ValidatedJson)
                .map_err(|e| {
                    debug!(
                        trace_id = %trace_id,
                        error = %Redacted(&e.to_string()),
                        body_size = body.len(),
                        "request document rejected"
                    );
                    AppError::bad_request(ErrorCode::BadRequest, describe_json_error(&e))
                })
        })
    }
}

/// `application/json; charset=utf-8` -> `application/json`
fn media_type(header: &str) -> String {
    header
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Client-facing description of a parse failure. Never echoes body content.
fn describe_json_error(error: &JsonError) -> String {
    match error.classify() {
        Category::Syntax => format!(
            "Invalid JSON at line {} column {}",
            error.line(),
            error.column()
        ),
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => "Request document does not have the expected shape".to_string(),
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
