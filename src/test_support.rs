//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::{DEFAULT_MAX_EXPERIENCE, DEFAULT_STATS, default_quests};
use crate::core::state::App;

/// Creates a test App with the default stats, quests and max experience.
pub fn test_app() -> App {
    App::new(DEFAULT_STATS, default_quests(), DEFAULT_MAX_EXPERIENCE)
}

/// Creates a test App with a custom quest list.
pub fn test_app_with_quests(quests: Vec<String>) -> App {
    App::new(DEFAULT_STATS, quests, DEFAULT_MAX_EXPERIENCE)
}
