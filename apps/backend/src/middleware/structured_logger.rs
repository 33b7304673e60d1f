//! Emits one `request_completed` event per request.
//!
//! The event carries the matched route template rather than the raw path, so
//! `/v1/games/7/players/3` and `/v1/games/8/players/1` aggregate together,
//! plus the problem code when the response is an error.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// Resource family of a route template: `/v1/games/{game_id}/players` -> `players`.
fn resource_of(route: &str) -> &str {
    route
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != "v1" && !seg.starts_with('{'))
        .last()
        .unwrap_or("-")
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let query = req.query_string().to_string();
        let trace_id = TraceId::of(&req);

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, route, code) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request()
                        .match_pattern()
                        .unwrap_or_else(|| res.request().path().to_string()),
                    res.response()
                        .extensions()
                        .get::<ErrorCode>()
                        .map(|c| c.as_str())
                        .unwrap_or("-"),
                ),
                Err(err) => (
                    err.as_response_error().status_code(),
                    "-".to_string(),
                    "-",
                ),
            };
            let resource = resource_of(&route).to_string();
            let duration_us = start.elapsed().as_micros() as u64;
            let status_code = status.as_u16();

            macro_rules! completed {
                ($level:ident) => {
                    $level!(
                        http.method = %method,
                        http.route = %route,
                        url.query = %Redacted(&query),
                        http.status_code = status_code,
                        resource = %resource,
                        error.code = code,
                        duration_us,
                        trace_id = %trace_id,
                        "request_completed"
                    )
                };
            }

            if status.is_server_error() {
                completed!(error);
            } else if status.is_client_error() {
                completed!(warn);
            } else {
                completed!(info);
            }

            result
        })
    }
}
