//! Authentication and permission interceptors
//!
//! Both are slots in the pipeline. Neither is enabled by default, and
//! neither does real verification yet:
//! - [`require_bearer`] only checks that a bearer token is present.
//! - [`check_permissions`] admits every request.

use axum::extract::Request;
use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Short-circuit with 401 unless the request carries a non-empty bearer token.
pub async fn require_bearer(req: Request, next: Next) -> Response {
    let has_token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty());

    if !has_token {
        tracing::warn!(path = %req.uri().path(), "rejected request without bearer token");
        return (StatusCode::UNAUTHORIZED, "missing bearer token\n").into_response();
    }

    next.run(req).await
}

/// Permission check placeholder; every request is admitted.
pub async fn check_permissions(req: Request, next: Next) -> Response {
    tracing::debug!(method = %req.method(), path = %req.uri().path(), "permission check skipped");
    next.run(req).await
}
