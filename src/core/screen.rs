//! Screen trait for full-page views.
//!
//! Screens follow a single-funnel update pattern:
//! - `init()` queues initial message(s)
//! - `handle_input()` queues messages from user input
//! - `handle_tick()` advances animation state
//! - `update()` processes all queued messages - THE SINGLE FUNNEL
//!
//! Only `update()` can return commands, raise navigation intents, or report
//! errors. This keeps all side effects flowing through one place.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::command::Command;
use crate::core::event::Event;
use crate::navigator::Intent;
use crate::theme::Theme;
use crate::ui::Keybinding;

/// Result from [`Screen::update`].
pub enum UpdateResult {
    /// No action needed
    Idle,
    /// Spawn these commands
    Commands(Vec<Box<dyn Command>>),
    /// Raise a navigation intent to the navigator
    Intent(Intent),
    /// Report an error
    Error(String),
}

impl<T: Command> From<T> for UpdateResult {
    fn from(value: T) -> Self {
        Self::Commands(vec![Box::new(value)])
    }
}

/// A full-page view.
///
/// Screens manage their own internal state and message queue. The App calls
/// methods in this order:
///
/// 1. `init()` - once when the screen becomes active
/// 2. `update()` - immediately after init to process startup messages
/// 3. For each event:
///    - `handle_tick()` if tick event
///    - `handle_input()` if input event, then `update()` if consumed
/// 4. When a command completes: `update()`
/// 5. `destroy()` - when the screen is being replaced
pub trait Screen {
    /// Initialize the screen by queuing startup message(s).
    fn init(&mut self) {}

    /// Clean up when the screen is being replaced.
    fn destroy(&mut self) {}

    /// Handle a tick event for animations and timed state.
    fn handle_tick(&mut self) {}

    /// Handle an input event.
    ///
    /// Queue internal messages based on user input. Return `true` if the
    /// event was consumed (the App will then call `update()`).
    fn handle_input(&mut self, event: &Event) -> bool;

    /// Process all queued messages and return the result.
    ///
    /// This is the only method that can return commands, raise intents, or
    /// report errors.
    fn update(&mut self) -> UpdateResult;

    /// Render the current state to the terminal.
    fn view(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Breadcrumb segments for the navigation bar.
    fn breadcrumbs(&self) -> Vec<String>;

    /// Keybindings for the current view, shown in the status bar and help.
    fn keybindings(&self) -> Vec<Keybinding> {
        vec![]
    }
}
