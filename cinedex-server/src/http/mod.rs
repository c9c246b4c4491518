//! HTTP layer - decodes requests, calls repositories, encodes results
//!
//! Axum server with:
//! - One generic CRUD router per entity
//! - Plain-text error bodies mapped from the error taxonomy
//! - The request pipeline (logging, optional CORS/auth, timeout)
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use extractors::JsonBody;
pub use server::{build_router, run_server, AppState, ServerError};
