//! # Theme
//!
//! All dashboard styling in one struct, built once at startup and passed
//! into the render functions. Nothing in the render path reads styling from
//! anywhere else, which keeps `draw_ui` deterministic and testable.
//!
//! Defaults reproduce the classic palette: pink headers, teal selection,
//! strikethrough gray for completed quests, a yellow-on-green level bar.
//! Each color can be overridden from the `[theme]` table in the config file.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::ThemeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Panel borders.
    pub border: Style,
    /// Panel headers ("Stats", "Quests", "Level Progression").
    pub header: Style,
    /// Quests that are neither selected nor completed.
    pub quest: Style,
    /// The selected, not-yet-completed quest.
    pub selected: Style,
    /// Completed quests, regardless of selection.
    pub completed: Style,
    /// The level bar text.
    pub bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default(),
            header: Style::default()
                .fg(Color::Indexed(211))
                .add_modifier(Modifier::BOLD),
            quest: Style::default(),
            selected: Style::default().fg(Color::Indexed(36)),
            completed: Style::default()
                .fg(Color::Indexed(241))
                .add_modifier(Modifier::CROSSED_OUT),
            bar: Style::default()
                .fg(Color::Indexed(228))
                .bg(Color::Indexed(34)),
        }
    }
}

impl Theme {
    /// Build a theme from config overrides, keeping defaults for anything
    /// unset or unparseable.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Self::default();

        if let Some(color) = parse_color(config.border.as_deref()) {
            theme.border = theme.border.fg(color);
        }
        if let Some(color) = parse_color(config.header.as_deref()) {
            theme.header = Style::default().fg(color).add_modifier(Modifier::BOLD);
        }
        if let Some(color) = parse_color(config.selected.as_deref()) {
            theme.selected = Style::default().fg(color);
        }
        if let Some(color) = parse_color(config.completed.as_deref()) {
            theme.completed = Style::default()
                .fg(color)
                .add_modifier(Modifier::CROSSED_OUT);
        }
        if let Some(color) = parse_color(config.bar_fg.as_deref()) {
            theme.bar = theme.bar.fg(color);
        }
        if let Some(color) = parse_color(config.bar_bg.as_deref()) {
            theme.bar = theme.bar.bg(color);
        }

        theme
    }
}

/// Parse a ratatui color string ("cyan", "#ff87af", "211"). A malformed
/// value logs a warning and is treated as unset.
fn parse_color(value: Option<&str>) -> Option<Color> {
    let value = value?;
    match Color::from_str(value) {
        Ok(color) => Some(color),
        Err(_) => {
            warn!("Ignoring unparseable theme color: {value:?}");
            None
        }
    }
}
