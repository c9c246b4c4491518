//! Character lookups beyond plain CRUD

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::db::Repository;
use crate::error::Error;
use crate::http::server::AppState;
use crate::models::Character;

/// GET /filmCharacters/{filmId} - characters featured in one film
async fn list_film_characters(
    State(state): State<Arc<AppState>>,
    Path(film_id): Path<String>,
) -> Result<Json<Vec<Character>>, Error> {
    let characters = Repository::<Character>::new(&state.pool)
        .find_by_film(&film_id)
        .await?;
    Ok(Json(characters))
}

/// Film-scoped character routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/filmCharacters/{filmId}", get(list_film_characters))
}
