//! Film entity

use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use super::validation::{require_range, require_ref, require_text};
use super::{EntityId, ValidationError};
use crate::db::Storable;

/// Earliest release year accepted
pub const MIN_YEAR: i32 = 1900;

/// Latest release year accepted
pub const MAX_YEAR: i32 = 2040;

/// A film, directed by one [`Director`](super::Director).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[serde(default)]
    pub id: EntityId,
    pub title: String,
    pub directed_by: EntityId,
    pub logline: String,
    pub year: i32,
}

impl Storable for Film {
    const TABLE: &'static str = "films";
    const RESOURCE: &'static str = "film";
    const COLUMNS: &'static [&'static str] = &["title", "directed_by", "logline", "year"];

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_ref("directedBy", self.directed_by)?;
        require_text("logline", &self.logline)?;
        require_range("year", self.year, MIN_YEAR, MAX_YEAR)
    }

    fn bind_columns(&self, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(self.title.clone())?;
        args.add(self.directed_by)?;
        args.add(self.logline.clone())?;
        args.add(self.year)
    }
}
