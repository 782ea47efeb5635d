//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the dashboard,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! state machine could be driven by any other front end without changes.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work: it
//! sleeps in `poll` for up to 250ms and only draws a frame when an event
//! arrived (or on the first iteration). Nothing in the dashboard animates,
//! so an idle terminal costs nothing.

pub mod component;
pub mod components;
mod event;
pub mod theme;
pub mod ui;

use std::io;

use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let theme = Theme::from_config(&config.theme);
    let mut app = App::from_config(&config);
    info!(
        "Dashboard ready: {} quests, {} XP to level up",
        app.quests.len(),
        app.max_experience
    );

    let mut terminal = ratatui::init();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &theme))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => continue,
                TuiEvent::Quit | TuiEvent::ForceQuit => Action::Quit,
                TuiEvent::CursorUp => Action::MoveUp,
                TuiEvent::CursorDown => Action::MoveDown,
                TuiEvent::Select => Action::CompleteSelected,
            };
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    info!("Questlog shutting down");
    Ok(())
}
