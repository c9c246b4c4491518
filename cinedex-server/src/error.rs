//! Error taxonomy shared by repositories and handlers
//!
//! Every repository method returns one of these four kinds. Driver errors
//! are rendered to text at the boundary so callers never match on `sqlx`
//! types.

use thiserror::Error;

use crate::models::ValidationError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Closed set of failure kinds
#[derive(Error, Debug)]
pub enum Error {
    /// Zero rows matched or were affected
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// Input rejected before any store access
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No connection could be obtained, or the store went away mid-statement
    #[error("database connection failed: {0}")]
    Connection(String),

    /// Anything else the store reported
    #[error("database operation failed: {0}")]
    Store(String),
}

/// Discriminant of [`Error`], for matching without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Connection,
    Store,
}

impl Error {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Connection(_) => ErrorKind::Connection,
            Self::Store(_) => ErrorKind::Store,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource: "row",
                id: String::new(),
            },
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_) => Self::Connection(e.to_string()),
            other => Self::Store(other.to_string()),
        }
    }
}
