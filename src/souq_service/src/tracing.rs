use std::time::Duration;

use axum::{body::Body, http::Request, response::Response};
use tracing::Span;
use uuid::Uuid;

/// Opens a span for one request, tagged with a fresh request id.
pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::info!("request received");
}

pub fn on_response(response: &Response, latency: Duration, _span: &Span) {
    let status = response.status().as_u16();
    match status / 100 {
        4..=5 => tracing::error!(status, latency = ?latency, "request failed"),
        _ => tracing::info!(status, latency = ?latency, "request completed"),
    }
}
