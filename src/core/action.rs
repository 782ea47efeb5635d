//! # Actions
//!
//! Everything that can happen in Questlog becomes an `Action`.
//! User presses Down? That's `Action::MoveDown`.
//! User presses Enter? That's `Action::CompleteSelected`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state in place. No side effects here. I/O happens
//! elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: feed in actions, assert on the state.
//! And debuggable: log every action, replay the exact session.

use log::{debug, info};

use crate::core::state::{App, XP_PER_QUEST};

/// Enumerated input events, one per key the dashboard reacts to.
/// Unknown keys are dropped in the TUI layer and never become actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    CompleteSelected,
}

/// What the host loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// The reducer: apply `action` to `app`.
///
/// Every transition is total - moves clamp at the list boundaries and
/// re-completing a quest is a no-op. After any non-quit action the derived
/// level bar is recomputed, even when the action itself changed nothing.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => return Effect::Quit,
        Action::MoveUp => {
            if app.selected > 0 {
                app.selected -= 1;
            }
        }
        Action::MoveDown => {
            if app.selected + 1 < app.quests.len() {
                app.selected += 1;
            }
        }
        Action::CompleteSelected => {
            // Insert returns false for an already-completed quest: no XP twice.
            if app.completed.insert(app.selected) {
                app.experience = app
                    .experience
                    .saturating_add(XP_PER_QUEST)
                    .min(app.max_experience);
                info!(
                    "Quest {} completed, experience {}/{}",
                    app.selected + 1,
                    app.experience,
                    app.max_experience
                );
            }
        }
    }

    app.refresh_level_bar();
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{BAR_WIDTH, format_level_bar};
    use crate::test_support::{test_app, test_app_with_quests};

    #[test]
    fn test_quit_returns_quit_effect_and_leaves_state_alone() {
        let mut app = test_app();
        app.selected = 2;
        app.experience = 30;
        let stale_bar = app.level_bar.clone();

        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(app.selected, 2);
        assert_eq!(app.experience, 30);
        // Quit returns before the bar recompute.
        assert_eq!(app.level_bar, stale_bar);
    }

    #[test]
    fn test_move_up_at_top_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::MoveUp), Effect::None);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_move_down_at_bottom_is_noop() {
        let mut app = test_app();
        let last = app.quests.len() - 1;
        app.selected = last;
        assert_eq!(update(&mut app, Action::MoveDown), Effect::None);
        assert_eq!(app.selected, last);
    }

    #[test]
    fn test_move_down_then_up() {
        let mut app = test_app();
        update(&mut app, Action::MoveDown);
        assert_eq!(app.selected, 1);
        update(&mut app, Action::MoveUp);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_complete_awards_experience_and_marks_quest() {
        let mut app = test_app();
        update(&mut app, Action::CompleteSelected);
        assert!(app.completed.contains(&0));
        assert_eq!(app.experience, 10);
        assert_eq!(app.level_bar, format_level_bar(10, 100));
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut app = test_app();
        update(&mut app, Action::CompleteSelected);
        update(&mut app, Action::CompleteSelected);
        assert_eq!(app.experience, 10);
        assert_eq!(app.completed.len(), 1);
    }

    #[test]
    fn test_experience_clamps_at_max() {
        // Twelve quests at +10 each against a max of 100: the tenth reaches
        // exactly 100 and further completions stay clamped there.
        let quests: Vec<String> = (1..=12).map(|i| format!("Quest {i}")).collect();
        let mut app = test_app_with_quests(quests);

        for i in 0..10 {
            app.selected = i;
            update(&mut app, Action::CompleteSelected);
        }
        assert_eq!(app.experience, 100);

        app.selected = 10;
        update(&mut app, Action::CompleteSelected);
        assert_eq!(app.experience, 100);
        assert!(app.completed.contains(&10));
        assert_eq!(app.level_bar, format!("[{}]", "=".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_noop_actions_still_refresh_bar() {
        let mut app = test_app();
        app.experience = 50;
        // Bar is stale until the next update cycle.
        assert_eq!(app.level_bar, format_level_bar(0, 100));
        update(&mut app, Action::MoveUp);
        assert_eq!(app.level_bar, format_level_bar(50, 100));
    }

    #[test]
    fn test_invariants_hold_under_arbitrary_sequences() {
        let mut app = test_app();
        let script = [
            Action::MoveDown,
            Action::MoveDown,
            Action::CompleteSelected,
            Action::MoveDown,
            Action::MoveDown, // clamps at the last quest
            Action::CompleteSelected,
            Action::MoveUp,
            Action::CompleteSelected, // already completed, no XP
            Action::CompleteSelected,
            Action::MoveUp,
            Action::MoveUp,
            Action::MoveUp, // clamps at the first quest
        ];
        for action in script {
            update(&mut app, action);
            assert!(app.selected < app.quests.len());
            assert!(app.experience <= app.max_experience);
            assert!(app.completed.iter().all(|&i| i < app.quests.len()));
        }
        // Quests 2 and 3 completed once each
        assert_eq!(app.experience, 20);
    }

    #[test]
    fn test_walk_to_last_quest_and_complete() {
        // Three MoveDowns on a 4-quest list land on index 3, a fourth is a
        // no-op, and completing there awards the first 10 XP.
        let mut app = test_app();
        for _ in 0..3 {
            update(&mut app, Action::MoveDown);
        }
        assert_eq!(app.selected, 3);
        update(&mut app, Action::MoveDown);
        assert_eq!(app.selected, 3);
        update(&mut app, Action::CompleteSelected);
        assert!(app.completed.contains(&3));
        assert_eq!(app.experience, 10);
    }
}
