//! Authentication middleware
//!
//! Rejects tool requests that fail the bearer-token check with `401`.

use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

use crate::auth::TokenAuth;

pub async fn require_token(State(auth): State<TokenAuth>, req: Request, next: Next) -> Response {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth.validate(header) {
        Ok(()) => next.run(req).await,
        Err(e) => {
            warn!("Rejected {} {}: {}", req.method(), req.uri().path(), e);
            (StatusCode::UNAUTHORIZED, Json(json!({ "detail": e.to_string() }))).into_response()
        }
    }
}
