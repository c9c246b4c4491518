//! Shared setup for store-backed tests
//!
//! Each test gets its own PostgreSQL schema so tests can run in parallel
//! against one database. Run with:
//! DATABASE_URL=postgres://... cargo test -p cinedex-server -- --ignored

#![allow(dead_code)]

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use tracing_subscriber::EnvFilter;

use cinedex_server::models::{Actor, Character, Director, Film};

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Route repository and handler logs to the test harness.
///
/// `RUST_LOG` overrides the default `cinedex_server=debug`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cinedex_server=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Fresh pool whose connections all use the schema `cinedex_<name>`.
pub async fn test_pool(name: &str) -> PgPool {
    init_tracing();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let schema = format!("cinedex_{}", name);

    let admin = PgPool::connect(&url).await.expect("admin connection failed");
    let reset = format!(
        "DROP SCHEMA IF EXISTS {schema} CASCADE; CREATE SCHEMA {schema};",
        schema = schema
    );
    sqlx::raw_sql(&reset)
        .execute(&admin)
        .await
        .expect("schema reset failed");
    admin.close().await;

    let search_path = format!("SET search_path TO {}", schema);
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .after_connect(move |conn, _meta| {
            let search_path = search_path.clone();
            Box::pin(async move {
                conn.execute(search_path.as_str()).await?;
                Ok(())
            })
        })
        .connect(&url)
        .await
        .expect("pool creation failed");

    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("schema creation failed");
    pool
}

pub fn director(first: &str, last: &str) -> Director {
    Director {
        id: 0,
        first_name: first.into(),
        middle_name: None,
        last_name: last.into(),
    }
}

pub fn actor(first: &str, last: &str) -> Actor {
    Actor {
        id: 0,
        first_name: first.into(),
        middle_name: None,
        last_name: last.into(),
    }
}

pub fn film(title: &str, directed_by: i32, year: i32) -> Film {
    Film {
        id: 0,
        title: title.into(),
        directed_by,
        logline: format!("{} logline", title),
        year,
    }
}

pub fn character(name: &str, portrayed_by: i32, featured_in: i32) -> Character {
    Character {
        id: 0,
        name: name.into(),
        portrayed_by,
        featured_in,
        dies_in_the_end: false,
    }
}
