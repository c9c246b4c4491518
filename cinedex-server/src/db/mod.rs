//! Database layer - connection pool and the generic repository
//!
//! # Design Principles
//!
//! - Connection pool injected by reference - no global handle
//! - One pooled connection per operation, released on drop
//! - One statement per operation - no transactions
//! - Rely on DB constraints for referential integrity

pub mod pool;
pub mod repository;
pub mod storable;

pub use pool::{create_lazy_pool, create_pool, create_pool_with_options, PoolOptions};
pub use repository::Repository;
pub use storable::Storable;
