use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Instant;

/// Health probes hit the server constantly; keep them out of the info log
const QUIET_PATHS: &[&str] = &["/health"];

/// Request logging middleware
///
/// Only the path is logged, never the query string or body, so contact
/// details do not end up in the logs.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let elapsed_ms = start.elapsed().as_millis();
    let status = response.status();

    match status {
        s if s.is_server_error() => {
            tracing::warn!(%method, %path, status = s.as_u16(), elapsed_ms, "Request failed")
        }
        StatusCode::REQUEST_TIMEOUT => {
            tracing::warn!(%method, %path, elapsed_ms, "Request timed out")
        }
        s if QUIET_PATHS.contains(&path.as_str()) => {
            tracing::debug!(%method, %path, status = s.as_u16(), elapsed_ms, "Request processed")
        }
        s => {
            tracing::info!(%method, %path, status = s.as_u16(), elapsed_ms, "Request processed")
        }
    }

    response
}
