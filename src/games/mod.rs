//! Game resolution engine and game-facing types.

pub mod engine;
pub mod types;
