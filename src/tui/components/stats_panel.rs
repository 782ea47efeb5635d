//! # StatsPanel Component
//!
//! Bordered panel listing the character's attributes, one per line, in the
//! fixed order guaranteed by `Stats::rows()`. Purely presentational - the
//! stat values never change after startup in this dashboard.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::Stats;
use crate::tui::component::Component;
use crate::tui::components::panel_block;
use crate::tui::theme::Theme;

pub struct StatsPanel<'a> {
    pub stats: &'a Stats,
    pub theme: &'a Theme,
}

impl Component for StatsPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled("Stats", self.theme.header))];
        for (name, value) in self.stats.rows() {
            lines.push(Line::raw(format!("{name}: {value}")));
        }
        let panel = Paragraph::new(lines).block(panel_block(self.theme));
        frame.render_widget(panel, area);
    }
}
