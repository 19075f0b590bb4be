use async_trait::async_trait;

use crate::core::command::{Command, CommandEnv};
use crate::ui::ToastKind;

/// Command to copy text to the system clipboard.
///
/// Uses [`CommandEnv`] so the clipboard handle outlives the command; on
/// Linux the contents are only readable while the owning process holds it.
pub struct CopyToClipboardCmd {
    text: String,
    toast_message: String,
    env: CommandEnv,
}

impl CopyToClipboardCmd {
    pub fn new(text: impl Into<String>, toast_message: impl Into<String>, env: CommandEnv) -> Self {
        Self {
            text: text.into(),
            toast_message: toast_message.into(),
            env,
        }
    }
}

#[async_trait]
impl Command for CopyToClipboardCmd {
    fn name(&self) -> String {
        "Copying to clipboard".to_string()
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        self.env.set_clipboard(&self.text)?;
        self.env
            .show_toast(format!("Copied {}", self.toast_message), ToastKind::Success);
        Ok(())
    }
}
