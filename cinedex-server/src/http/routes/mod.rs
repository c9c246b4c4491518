//! Route handlers organized by resource

pub mod characters;
pub mod entities;
pub mod health;
