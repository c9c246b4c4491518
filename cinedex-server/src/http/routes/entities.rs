//! Uniform CRUD endpoints, mounted once per entity type
//!
//! - `POST   /{table}/`      create, body without id
//! - `GET    /{table}/{id}`  find one
//! - `GET    /{table}/`      find all
//! - `PATCH  /{table}/`      full replace, body with id
//! - `DELETE /{table}/{id}`  hard delete, empty 200

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::{Repository, Storable};
use crate::error::Error;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;

async fn create<E: Storable>(
    State(state): State<Arc<AppState>>,
    JsonBody(entity): JsonBody<E>,
) -> Result<Json<E>, Error> {
    let created = Repository::<E>::new(&state.pool).create(&entity).await?;
    Ok(Json(created))
}

async fn find_one<E: Storable>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<E>, Error> {
    let entity = Repository::<E>::new(&state.pool).find_one(&id).await?;
    Ok(Json(entity))
}

async fn find_all<E: Storable>(State(state): State<Arc<AppState>>) -> Result<Json<Vec<E>>, Error> {
    let entities = Repository::<E>::new(&state.pool).find_all().await?;
    Ok(Json(entities))
}

async fn update<E: Storable>(
    State(state): State<Arc<AppState>>,
    JsonBody(entity): JsonBody<E>,
) -> Result<Json<E>, Error> {
    let updated = Repository::<E>::new(&state.pool).update(entity).await?;
    Ok(Json(updated))
}

async fn delete<E: Storable>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    Repository::<E>::new(&state.pool).delete(&id).await?;
    Ok(StatusCode::OK)
}

/// CRUD routes for `E`, under `/{E::TABLE}/`
pub fn router<E: Storable>() -> Router<Arc<AppState>> {
    let collection = format!("/{}/", E::TABLE);
    let member = format!("/{}/{{id}}", E::TABLE);

    Router::new()
        .route(
            &collection,
            get(find_all::<E>).post(create::<E>).patch(update::<E>),
        )
        .route(&member, get(find_one::<E>).delete(delete::<E>))
}
