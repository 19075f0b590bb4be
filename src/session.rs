//! Auth session stub.
//!
//! Stands in for the real authentication backend: the app holds the current
//! user and notification count in memory and passes them into screens
//! explicitly, keeping the navigator and filter store testable without any
//! ambient singletons.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::core::command::{Command, CommandEnv};
use crate::core::message::AppMessage;
use crate::model::User;

/// The signed-in state of the application.
#[derive(Debug, Clone)]
pub struct Session {
    user: Option<User>,
    notification_count: u32,
}

impl Session {
    /// Demo session used until a real auth backend exists.
    pub fn mock() -> Self {
        Self {
            user: Some(User::new("John Doe", "john@example.com")),
            notification_count: 3,
        }
    }

    /// The signed-in user, or `None` after sign-out.
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub const fn notification_count(&self) -> u32 {
        self.notification_count
    }

    /// Drop the signed-in user and their notifications.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.notification_count = 0;
    }
}

/// Async sign-out against the (stubbed) auth backend.
///
/// Reports success or failure back through the app channel; the app shows a
/// transient notification either way.
pub struct SignOutCmd {
    env: CommandEnv,
}

impl SignOutCmd {
    pub const fn new(env: CommandEnv) -> Self {
        Self { env }
    }
}

#[async_trait]
impl Command for SignOutCmd {
    fn name(&self) -> String {
        "Signing out".to_string()
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        // Simulated round trip to the auth backend.
        tokio::time::sleep(Duration::from_millis(250)).await;
        info!("Sign-out completed");
        self.env.send(AppMessage::SignedOut { success: true });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_session_is_signed_in() {
        let session = Session::mock();
        assert!(session.current_user().is_some());
        assert_eq!(session.notification_count(), 3);
    }

    #[test]
    fn sign_out_clears_user_and_notifications() {
        let mut session = Session::mock();
        session.sign_out();
        assert!(session.current_user().is_none());
        assert_eq!(session.notification_count(), 0);
    }
}
