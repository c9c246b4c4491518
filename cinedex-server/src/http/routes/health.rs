//! Liveness endpoint
//!
//! Reports the pool's bookkeeping without checking out a connection, so it
//! answers even while the store is unreachable.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStatus {
    /// Open connections, idle or checked out
    pub size: u32,
    pub idle: usize,
    pub closed: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub pool: PoolStatus,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let pool = &state.pool;
    let closed = pool.is_closed();
    Json(HealthResponse {
        status: if closed { "closing" } else { "ok" },
        version: env!("CARGO_PKG_VERSION"),
        pool: PoolStatus {
            size: pool.size(),
            idle: pool.num_idle(),
            closed,
        },
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
