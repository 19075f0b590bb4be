use std::sync::{Arc, Mutex};

use arboard::Clipboard;
use tokio::sync::mpsc::UnboundedSender;

use crate::core::message::AppMessage;
use crate::ui::ToastKind;

/// Shared environment for commands.
///
/// Provides access to shared resources like the clipboard and the app
/// message channel. Clone is cheap (Arc-based) so it can be handed to
/// multiple commands.
#[derive(Clone)]
pub struct CommandEnv {
    clipboard: Arc<Mutex<Option<Clipboard>>>,
    app_tx: UnboundedSender<AppMessage>,
}

impl CommandEnv {
    pub fn new(app_tx: UnboundedSender<AppMessage>) -> Self {
        Self {
            clipboard: Arc::new(Mutex::new(None)),
            app_tx,
        }
    }

    /// Copy text to the system clipboard.
    ///
    /// On Linux the clipboard is held by the owning process, so the text
    /// stays available until the next copy or app exit.
    pub fn set_clipboard(&self, text: &str) -> color_eyre::Result<()> {
        let mut guard = self
            .clipboard
            .lock()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to lock clipboard: {e}"))?;

        // Lazy initialization on first use
        if guard.is_none() {
            *guard = Some(Clipboard::new()?);
        }

        if let Some(clipboard) = guard.as_mut() {
            clipboard.set_text(text)?;
        }

        Ok(())
    }

    /// Show a toast notification.
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) {
        let _ = self.app_tx.send(AppMessage::ShowToast {
            message: message.into(),
            kind,
        });
    }

    /// Send an app-level message.
    pub fn send(&self, message: AppMessage) {
        let _ = self.app_tx.send(message);
    }
}
