//! Axum server setup
//!
//! Server skeleton with:
//! - Injected pool in shared state (no global handle)
//! - The configured request pipeline around every route
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use super::routes;
use crate::config::ServerConfig;
use crate::middleware::Pipeline;
use crate::models::{Actor, Character, Director, Film};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Build the full route table wrapped in `pipeline`.
pub fn build_router(pool: PgPool, pipeline: &Pipeline) -> Router {
    let state = Arc::new(AppState { pool });

    let routes = Router::new()
        .merge(routes::health::router())
        .merge(routes::entities::router::<Director>())
        .merge(routes::entities::router::<Actor>())
        .merge(routes::entities::router::<Film>())
        .merge(routes::entities::router::<Character>())
        .merge(routes::characters::router())
        .with_state(state);

    pipeline.wrap(routes)
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let pipeline = config.pipeline();
    tracing::info!(
        stages = ?pipeline.stage_names(),
        timeout_ms = pipeline.timeout().as_millis() as u64,
        "request pipeline configured"
    );
    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
    }

    let app = build_router(pool, &pipeline);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
