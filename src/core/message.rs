//! Application-level messages.
//!
//! # Terminology
//! - **Event**: input from the world (keyboard, timer) - see [`crate::core::event::Event`]
//! - **Message**: internal communication driving app state changes
//! - **Intent**: a request to transition the navigator - see [`crate::navigator::Intent`]
//! - **Command**: async side effect operations - see [`crate::core::command::Command`]
//!
//! This enum only contains app-level messages. Screen-specific messages are
//! handled locally within each screen using their own message channels
//! (e.g. `HomeMsg`, `ChatMsg`).

use crate::navigator::Intent;
use crate::theme::ThemeInfo;
use crate::ui::ToastKind;

/// Application-level messages for state transitions and global feedback.
#[derive(Debug, Clone)]
pub enum AppMessage {
    // === Lifecycle ===
    /// Periodic tick for animations and the carousel
    Tick,
    /// Render the UI
    Render,
    /// Terminal resized
    Resize(u16, u16),
    /// Suspend the application (Ctrl+Z)
    Suspend,
    /// Resume from suspension
    Resume,
    /// Quit the application
    Quit,
    /// Clear and redraw the terminal
    ClearScreen,

    // === Feedback ===
    /// Display an error dialog
    DisplayError(String),
    /// Display the help overlay
    DisplayHelp,
    /// Display the theme selector overlay
    DisplayThemeSelector,
    /// Show a transient toast notification
    ShowToast { message: String, kind: ToastKind },

    // === Session ===
    /// Sign-out completed
    SignedOut { success: bool },

    // === Commands ===
    /// A spawned command finished; the active screen should drain its queue
    CommandCompleted { name: String, success: bool },

    // === Navigation ===
    /// A screen raised a navigation intent
    Intent(Intent),
    /// User picked a theme from the selector
    SelectTheme(ThemeInfo),
}
