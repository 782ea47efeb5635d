//! # Application State
//!
//! Core dashboard state for Questlog. This module contains domain data only -
//! no TUI-specific types. Presentation (styles, layout) lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── stats: Stats              // character attributes (fixed set)
//! ├── quests: Vec<String>       // quest descriptions, fixed at startup
//! ├── selected: usize           // cursor position in the quest list
//! ├── completed: HashSet<usize> // indices of finished quests
//! ├── experience: u32           // current XP, clamped to max_experience
//! ├── max_experience: u32       // XP needed to fill the level bar
//! └── level_bar: String         // derived bar text, recomputed each cycle
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::collections::HashSet;

use crate::core::config::ResolvedConfig;

/// Experience awarded for each newly completed quest.
pub const XP_PER_QUEST: u32 = 10;

/// Width of the level bar in cells, excluding the bracket delimiters.
pub const BAR_WIDTH: usize = 30;

/// Character attributes. The set is closed, so an explicit record rather
/// than a keyed map - rendering iterates `rows()` in a guaranteed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub health: u32,
}

impl Stats {
    /// Stat rows in display order.
    pub fn rows(&self) -> [(&'static str, u32); 4] {
        [
            ("Strength", self.strength),
            ("Dexterity", self.dexterity),
            ("Intelligence", self.intelligence),
            ("Health", self.health),
        ]
    }
}

pub struct App {
    pub stats: Stats,
    pub quests: Vec<String>,
    pub selected: usize,
    pub completed: HashSet<usize>,
    pub experience: u32,
    pub max_experience: u32,
    /// Derived display text, kept in sync by the reducer after every action.
    pub level_bar: String,
}

impl App {
    pub fn new(stats: Stats, quests: Vec<String>, max_experience: u32) -> Self {
        Self {
            stats,
            quests,
            selected: 0,
            completed: HashSet::new(),
            experience: 0,
            max_experience,
            level_bar: format_level_bar(0, max_experience),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.stats, config.quests.clone(), config.max_experience)
    }

    /// Recompute the derived bar text from the current experience.
    pub fn refresh_level_bar(&mut self) {
        self.level_bar = format_level_bar(self.experience, self.max_experience);
    }
}

/// Render the textual level bar: `[`, `=` per filled unit, spaces for the
/// rest, `]`. Filled count is `floor(BAR_WIDTH * experience / max)`.
pub fn format_level_bar(experience: u32, max_experience: u32) -> String {
    let filled = (BAR_WIDTH as u64 * u64::from(experience) / u64::from(max_experience)) as usize;
    format!("[{}{}]", "=".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.selected, 0);
        assert_eq!(app.experience, 0);
        assert!(app.completed.is_empty());
        assert_eq!(app.quests.len(), 4);
        assert_eq!(app.level_bar, format!("[{}]", " ".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_stats_rows_order_is_fixed() {
        let app = test_app();
        let names: Vec<&str> = app.stats.rows().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["Strength", "Dexterity", "Intelligence", "Health"]);
    }

    #[test]
    fn test_format_level_bar_half_full() {
        // 50/100 → floor(30 * 0.5) = 15 filled units
        let bar = format_level_bar(50, 100);
        assert_eq!(bar, format!("[{}{}]", "=".repeat(15), " ".repeat(15)));
    }

    #[test]
    fn test_format_level_bar_floors_partial_units() {
        // 33/100 → floor(9.9) = 9 filled units
        let bar = format_level_bar(33, 100);
        assert_eq!(bar, format!("[{}{}]", "=".repeat(9), " ".repeat(21)));
    }

    #[test]
    fn test_format_level_bar_full() {
        let bar = format_level_bar(100, 100);
        assert_eq!(bar, format!("[{}]", "=".repeat(BAR_WIDTH)));
    }
}
