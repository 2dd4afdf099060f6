//! Logging middleware
//!
//! Provides request logging functionality.

use axum::{extract::Request, middleware::Next, response::Response};
use log::info;
use std::time::Instant;

/// Log each request with its status and latency
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}
