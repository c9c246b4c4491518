//! Command implementations for the cinedex CLI

pub mod serve;

pub use serve::run_serve;
