//! cinedex-server: repository core and HTTP surface for the film database
//!
//! Directors, actors, films and characters are stored in PostgreSQL and
//! served through one generic repository and one generic set of CRUD
//! routes, wrapped in a configurable request pipeline.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod middleware;
pub mod models;

pub use config::{DatabaseConfig, ServerConfig};
pub use error::{Error, ErrorKind, Result};
