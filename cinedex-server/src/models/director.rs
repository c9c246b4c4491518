//! Director entity

use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use super::validation::require_text;
use super::{EntityId, ValidationError};
use crate::db::Storable;

/// A film director. Referenced by [`Film::directed_by`](super::Film).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    #[serde(default)]
    pub id: EntityId,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
}

impl Storable for Director {
    const TABLE: &'static str = "directors";
    const RESOURCE: &'static str = "director";
    const COLUMNS: &'static [&'static str] = &["first_name", "middle_name", "last_name"];

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)
    }

    fn bind_columns(&self, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(self.first_name.clone())?;
        args.add(self.middle_name.clone())?;
        args.add(self.last_name.clone())
    }
}
