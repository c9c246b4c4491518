//! The capability an entity needs to be served by [`Repository`](super::Repository).

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::FromRow;

use crate::models::{EntityId, ValidationError};

/// A row type with a serial `id` primary key.
///
/// Scanning goes through [`FromRow`]; binding goes through
/// [`bind_columns`](Storable::bind_columns), which must push exactly one
/// argument per entry of [`COLUMNS`](Storable::COLUMNS), in the same order.
pub trait Storable:
    for<'r> FromRow<'r, PgRow> + Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static
{
    /// Table name. Also the URL segment the entity is mounted under.
    const TABLE: &'static str;

    /// Singular name used in diagnostics ("director '7' not found").
    const RESOURCE: &'static str;

    /// Writable columns, excluding `id`.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> EntityId;

    /// Check required fields. Runs before any store access.
    fn validate(&self) -> Result<(), ValidationError>;

    fn bind_columns(&self, args: &mut PgArguments) -> Result<(), BoxDynError>;
}

/// `id, col1, col2, ...`
pub(crate) fn select_list<E: Storable>() -> String {
    std::iter::once("id")
        .chain(E::COLUMNS.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `$1, $2, ... $n`
pub(crate) fn placeholders(n: usize) -> String {
    (1..=n)
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `col1 = $1, col2 = $2, ...`
pub(crate) fn assignments<E: Storable>() -> String {
    E::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ${}", col, i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}
