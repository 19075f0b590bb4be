//! Event types flowing into the application.
//!
//! Events represent input from the external world (keyboard, mouse, timers).
//! They are produced by the TUI event loop and consumed by screens.

use crossterm::event::{KeyEvent, MouseEvent};

/// Events from the terminal/environment.
#[derive(Clone, Debug)]
pub enum Event {
    /// Terminal initialized
    Init,
    /// Quit requested
    Quit,
    /// Error occurred in the event loop
    Error(String),
    /// Periodic tick (for animations and the news carousel)
    Tick,
    /// Render frame requested
    Render,
    /// Terminal gained focus
    FocusGained,
    /// Terminal lost focus
    FocusLost,
    /// Text pasted from clipboard
    Paste(String),
    /// Key pressed
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resized
    Resize(u16, u16),
}
