//! # TUI Components
//!
//! One file per dashboard panel, in render order:
//!
//! - `StatsPanel`: character attributes
//! - `QuestList`: numbered quests with selection/completion styling
//! - `LevelBar`: the experience progression bar
//!
//! All three are stateless, props-based components: they receive their data
//! as struct fields (borrowed from `App` and `Theme`) and render it, nothing
//! more. Dependencies stay explicit and each panel is testable on its own
//! with a `TestBackend`.
//!
//! Each component file contains everything related to that component:
//! props, rendering logic, and tests.

mod level_bar;
mod quest_list;
mod stats_panel;

pub use level_bar::LevelBar;
pub use quest_list::QuestList;
pub use stats_panel::StatsPanel;

use ratatui::widgets::{Block, BorderType, Padding};

use crate::tui::theme::Theme;

/// The shared panel frame: rounded border, one cell of padding.
pub(crate) fn panel_block(theme: &Theme) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border)
        .padding(Padding::uniform(1))
}
