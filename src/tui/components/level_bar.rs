//! # LevelBar Component
//!
//! Bordered panel showing the experience progression bar. The bar text
//! itself is derived state owned by `App` (the reducer keeps it in sync);
//! this component just wraps it in the panel frame and applies the bar
//! style.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::panel_block;
use crate::tui::theme::Theme;

pub struct LevelBar<'a> {
    pub bar: &'a str,
    pub theme: &'a Theme,
}

impl Component for LevelBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled("Level Progression", self.theme.header)),
            Line::from(Span::styled(self.bar, self.theme.bar)),
        ];
        let panel = Paragraph::new(lines).block(panel_block(self.theme));
        frame.render_widget(panel, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::format_level_bar;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer.cell((x, y)).unwrap().symbol())
            .collect()
    }

    #[test]
    fn test_renders_header_and_bar_text() {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let bar = format_level_bar(50, 100);

        terminal
            .draw(|f| {
                LevelBar {
                    bar: &bar,
                    theme: &theme,
                }
                .render(f, f.area());
            })
            .unwrap();

        assert!(row_text(&terminal, 2).contains("Level Progression"));
        let bar_row = row_text(&terminal, 3);
        assert!(bar_row.contains(&format!("[{}{}]", "=".repeat(15), " ".repeat(15))));
    }

    #[test]
    fn test_bar_cells_use_bar_style() {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let bar = format_level_bar(100, 100);

        terminal
            .draw(|f| {
                LevelBar {
                    bar: &bar,
                    theme: &theme,
                }
                .render(f, f.area());
            })
            .unwrap();

        let cell = terminal.backend().buffer().cell((3, 3)).unwrap();
        assert_eq!(cell.style().fg, theme.bar.fg);
        assert_eq!(cell.style().bg, theme.bar.bg);
    }
}
