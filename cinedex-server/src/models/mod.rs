//! Domain models with validation before storage
//!
//! Every entity is validated on create and update. Invalid input
//! returns ValidationError, not panic.

pub mod validation;
pub mod director;
pub mod actor;
pub mod film;
pub mod character;

pub use validation::{parse_id, ValidationError};
pub use director::Director;
pub use actor::Actor;
pub use film::Film;
pub use character::Character;

/// Store-assigned serial key
pub type EntityId = i32;
