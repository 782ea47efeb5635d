use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{LevelBar, QuestList, StatsPanel};
use crate::tui::theme::Theme;

/// Draw the dashboard: Stats, Quests and Level Progression, side by side,
/// always in that order. Pure with respect to `App` - rendering the same
/// state twice produces the same frame.
pub fn draw_ui(frame: &mut Frame, app: &App, theme: &Theme) {
    use Constraint::{Length, Min};

    // Stats fits its widest line; the bar needs its 32 text cells plus the
    // panel frame; quests flex into whatever is left.
    let layout = Layout::horizontal([Length(20), Min(0), Length(36)]);
    let [stats_area, quest_area, bar_area] = layout.areas(frame.area());

    StatsPanel {
        stats: &app.stats,
        theme,
    }
    .render(frame, stats_area);

    QuestList {
        quests: &app.quests,
        selected: app.selected,
        completed: &app.completed,
        theme,
    }
    .render(frame, quest_area);

    LevelBar {
        bar: &app.level_bar,
        theme,
    }
    .render(frame, bar_area);
}
