//! # QuestList Component
//!
//! Bordered panel listing every quest, numbered from 1. Line styling is a
//! three-way selector: completed quests always get the completed style
//! (selection never overrides it), the selected incomplete quest gets the
//! selected style, everything else renders plain.

use std::collections::HashSet;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::panel_block;
use crate::tui::theme::Theme;

pub struct QuestList<'a> {
    pub quests: &'a [String],
    pub selected: usize,
    pub completed: &'a HashSet<usize>,
    pub theme: &'a Theme,
}

impl Component for QuestList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled("Quests", self.theme.header))];
        for (index, quest) in self.quests.iter().enumerate() {
            let style = if self.completed.contains(&index) {
                self.theme.completed
            } else if index == self.selected {
                self.theme.selected
            } else {
                self.theme.quest
            };
            lines.push(Line::from(Span::styled(
                format!("{}. {}", index + 1, quest),
                style,
            )));
        }
        let panel = Paragraph::new(lines).block(panel_block(self.theme));
        frame.render_widget(panel, area);
    }
}
