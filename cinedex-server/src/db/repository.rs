//! Generic CRUD repository
//!
//! One implementation serves every [`Storable`] entity:
//! - create: INSERT ... RETURNING (store assigns the id)
//! - find_one / find_all: SELECT, no ORDER BY
//! - update / delete: zero affected rows surfaces as NotFound
//!
//! Each call checks out one pooled connection, runs one statement, and
//! drops the connection before returning, whatever the outcome.

use std::marker::PhantomData;

use sqlx::pool::PoolConnection;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, PgPool, Postgres};

use super::storable::{assignments, placeholders, select_list, Storable};
use crate::error::{Error, Result};
use crate::models::{parse_id, Character, EntityId, ValidationError};

/// Repository for one entity type over an injected pool
pub struct Repository<'a, E> {
    pool: &'a PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<'a, E: Storable> Repository<'a, E> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    async fn acquire(&self) -> Result<PoolConnection<Postgres>> {
        self.pool.acquire().await.map_err(|e| {
            tracing::warn!(table = E::TABLE, error = %e, "connection acquisition failed");
            Error::Connection(e.to_string())
        })
    }

    fn arguments(entity: &E) -> Result<PgArguments> {
        let mut args = PgArguments::default();
        entity
            .bind_columns(&mut args)
            .map_err(|e| Error::Store(format!("failed to bind {}: {}", E::RESOURCE, e)))?;
        Ok(args)
    }

    /// Insert a new row, returning it with the store-assigned id.
    ///
    /// Any `id` on the input is ignored.
    pub async fn create(&self, entity: &E) -> Result<E> {
        entity.validate()?;
        let args = Self::arguments(entity)?;
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders(E::COLUMNS.len()),
            select_list::<E>(),
        );

        let mut conn = self.acquire().await?;
        let created = sqlx::query_as_with::<_, E, _>(&sql, args)
            .fetch_one(&mut *conn)
            .await?;

        tracing::debug!(table = E::TABLE, id = created.id(), "row created");
        Ok(created)
    }

    /// Fetch exactly one row by id.
    pub async fn find_one(&self, id: &str) -> Result<E> {
        let id = parse_id("id", id)?;
        let sql = format!("SELECT {} FROM {} WHERE id = $1", select_list::<E>(), E::TABLE);

        let mut conn = self.acquire().await?;
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| Error::not_found(E::RESOURCE, id))
    }

    /// Fetch every row.
    ///
    /// Rows come back in the store's scan order, which is not guaranteed
    /// stable between calls. An empty table yields an empty vec.
    pub async fn find_all(&self) -> Result<Vec<E>> {
        let sql = format!("SELECT {} FROM {}", select_list::<E>(), E::TABLE);

        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    /// Replace every writable column of the row matching `entity.id()`.
    ///
    /// Returns the entity as submitted; the row is not re-read.
    pub async fn update(&self, entity: E) -> Result<E> {
        if entity.id() <= 0 {
            return Err(ValidationError::Missing { field: "id" }.into());
        }
        entity.validate()?;
        let mut args = Self::arguments(&entity)?;
        args.add(entity.id())
            .map_err(|e| Error::Store(format!("failed to bind id: {}", e)))?;
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ${}",
            E::TABLE,
            assignments::<E>(),
            E::COLUMNS.len() + 1,
        );

        let mut conn = self.acquire().await?;
        let result = sqlx::query_with(&sql, args).execute(&mut *conn).await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found(E::RESOURCE, entity.id()));
        }
        Ok(entity)
    }

    /// Hard-delete the row with the given id.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = parse_id("id", id)?;
        let sql = format!("DELETE FROM {} WHERE id = $1", E::TABLE);

        let mut conn = self.acquire().await?;
        let result = sqlx::query(&sql).bind(id).execute(&mut *conn).await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found(E::RESOURCE, id));
        }
        tracing::debug!(table = E::TABLE, id, "row deleted");
        Ok(())
    }

    /// Fetch every row whose `column` equals `value`.
    ///
    /// `column` must be one of [`Storable::COLUMNS`].
    async fn find_where(&self, column: &'static str, value: EntityId) -> Result<Vec<E>> {
        debug_assert!(E::COLUMNS.contains(&column), "unknown column {}", column);
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            select_list::<E>(),
            E::TABLE,
            column
        );

        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, E>(&sql)
            .bind(value)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }
}

impl Repository<'_, Character> {
    /// Characters featured in the given film. Empty when there are none.
    pub async fn find_by_film(&self, film_id: &str) -> Result<Vec<Character>> {
        let film_id = parse_id("filmId", film_id)?;
        self.find_where("featured_in", film_id).await
    }
}
