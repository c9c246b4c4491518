//! HTTP server command

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use cinedex_server::db::{create_pool_with_options, PoolOptions};
use cinedex_server::http::run_server;
use cinedex_server::{DatabaseConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "HOST", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Database URL (overrides DB_USER, DB_PASSWORD, DB_HOST, DB_PORT, DB_NAME)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// End-to-end request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout_secs: u64,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = 10)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Require a bearer token on every request
    #[arg(long)]
    pub require_auth: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = match args.database_url {
        Some(url) => url,
        None => DatabaseConfig::from_env()
            .context("Database not configured. Set --database-url, DATABASE_URL, or DB_* variables")?
            .url(),
    };

    let options = PoolOptions {
        max_connections: args.max_connections,
        ..PoolOptions::default()
    };
    let pool = create_pool_with_options(&database_url, options)
        .await
        .context("Failed to create database pool")?;
    tracing::info!(max_connections = options.max_connections, "Database pool ready");

    let config = ServerConfig {
        bind_addr: args.bind,
        request_timeout: Duration::from_secs(args.timeout_secs),
        cors_permissive: args.cors_permissive,
        require_auth: args.require_auth,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
