//! Character entity

use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use super::validation::{require_ref, require_text};
use super::{EntityId, ValidationError};
use crate::db::Storable;

/// A role, portrayed by one [`Actor`](super::Actor) in one [`Film`](super::Film).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    pub portrayed_by: EntityId,
    pub featured_in: EntityId,
    #[serde(default)]
    pub dies_in_the_end: bool,
}

impl Storable for Character {
    const TABLE: &'static str = "characters";
    const RESOURCE: &'static str = "character";
    const COLUMNS: &'static [&'static str] =
        &["name", "portrayed_by", "featured_in", "dies_in_the_end"];

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_ref("portrayedBy", self.portrayed_by)?;
        require_ref("featuredIn", self.featured_in)
    }

    fn bind_columns(&self, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(self.name.clone())?;
        args.add(self.portrayed_by)?;
        args.add(self.featured_in)?;
        args.add(self.dies_in_the_end)
    }
}
