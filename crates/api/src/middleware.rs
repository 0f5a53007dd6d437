//! Request interceptors: the authentication gate and request logging.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::app::errors::ApiError;

/// Shared secret the authentication gate compares against.
#[derive(Clone)]
pub struct AuthState {
    pub token: Arc<str>,
}

/// Per-request PASS/REJECT gate. Rejections short-circuit: downstream stages
/// never run and the caller gets 401 with `{"error":"Unauthorized"}`.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    check_bearer(req.headers(), &state.token)?;
    Ok(next.run(req).await)
}

fn check_bearer(headers: &HeaderMap, expected: &str) -> Result<(), ApiError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(ApiError::Unauthorized)?;

    let header = header.to_str().map_err(|_| ApiError::Unauthorized)?;

    // Exact match on scheme and value; anything else is rejected.
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?;

    if token != expected {
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}

/// Logs method, path, status, and latency once the response is ready.
pub async fn trace_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started_at = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = started_at.elapsed().as_millis() as u64,
        "request handled"
    );

    response
}
