//! Async command pattern for side effects.
//!
//! Commands represent async operations that run outside the main event loop:
//! the simulated news fetch, message delivery, sign-out, and clipboard
//! access. Screens return commands from `update()`, and the App spawns them.

mod clipboard;
mod env;

use async_trait::async_trait;
pub use clipboard::CopyToClipboardCmd;
pub use env::CommandEnv;

/// Async command that performs a side effect.
///
/// Commands typically send results back to the owning screen via a channel
/// captured at construction time.
#[async_trait]
pub trait Command: Send + 'static {
    /// Human-readable name for logging and error reporting.
    fn name(&self) -> String;

    /// Execute the command.
    async fn execute(self: Box<Self>) -> color_eyre::Result<()>;
}
