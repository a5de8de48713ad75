//! Request middleware: access logging and the fixed request timeout.

use std::time::{Duration, Instant};

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// The server aborts any request still running after one second.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

/// Log method, URI, status, response size, and duration for every request.
pub async fn request_logging(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    // Bodies are at most one HTML page; buffer to count bytes.
    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(%method, %uri, %err, "failed to read response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    tracing::info!(
        %method,
        %uri,
        status = parts.status.as_u16(),
        size = bytes.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "handled request"
    );
    Response::from_parts(parts, Body::from(bytes))
}

/// Abort requests that outlive the fixed server timeout.
pub async fn request_timeout(req: Request, next: Next) -> Response {
    match tokio::time::timeout(REQUEST_TIMEOUT, next.run(req)).await {
        Ok(response) => response,
        Err(_) => StatusCode::REQUEST_TIMEOUT.into_response(),
    }
}
