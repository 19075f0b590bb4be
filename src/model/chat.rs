//! Conversations and messages for the mock messaging feature.

use chrono::{DateTime, Duration, Local};

/// Messages longer than this are rejected by the delivery stub.
pub const MAX_MESSAGE_LEN: usize = 500;

/// A private conversation with another member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    /// Display name of the other participant
    pub name: String,
    pub unread: u32,
    /// Relative label for the last activity (e.g. "30 min ago")
    pub last_activity: String,
}

impl Conversation {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unread: u32,
        last_activity: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unread,
            last_activity: last_activity.into(),
        }
    }

    /// Uppercase initials of the other participant.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}

/// Delivery state of an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sending,
    Delivered,
    Failed,
}

/// A single message inside a conversation.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: u32,
    pub content: String,
    pub sent_at: DateTime<Local>,
    /// true when sent by the signed-in user
    pub outgoing: bool,
    pub delivery: Delivery,
}

impl ChatMessage {
    pub fn incoming(id: u32, content: impl Into<String>, sent_at: DateTime<Local>) -> Self {
        Self {
            id,
            content: content.into(),
            sent_at,
            outgoing: false,
            delivery: Delivery::Delivered,
        }
    }

    pub fn outgoing(id: u32, content: impl Into<String>, sent_at: DateTime<Local>) -> Self {
        Self {
            id,
            content: content.into(),
            sent_at,
            outgoing: true,
            delivery: Delivery::Sending,
        }
    }
}

/// Delivery stub standing in for the real messaging backend.
///
/// Accepts anything except oversized messages so the failure path stays
/// reachable from the UI.
pub fn deliver(conversation_id: &str, text: &str) -> Result<(), String> {
    if conversation_id.is_empty() {
        return Err("No conversation selected".to_string());
    }
    if text.len() > MAX_MESSAGE_LEN {
        return Err(format!(
            "Message exceeds {MAX_MESSAGE_LEN} characters"
        ));
    }
    Ok(())
}

/// Seed conversations shown on the home screen.
pub fn sample_conversations() -> Vec<Conversation> {
    vec![
        Conversation::new("conv-sarah", "Sarah Kim", 1, "30 min ago"),
        Conversation::new("conv-alex", "Alex Rivera", 0, "2 hours ago"),
        Conversation::new("conv-mike", "Mike Johnson", 2, "1 day ago"),
    ]
}

/// Seed message history for a conversation.
pub fn seed_messages(now: DateTime<Local>) -> Vec<ChatMessage> {
    vec![
        ChatMessage::incoming(
            1,
            "Hi! I saw your post about accommodation in NYC. Is it still available?",
            now - Duration::hours(2),
        ),
        ChatMessage {
            delivery: Delivery::Delivered,
            ..ChatMessage::outgoing(
                2,
                "Yes, it's still available! Would you like to know more details?",
                now - Duration::hours(1),
            )
        },
        ChatMessage::incoming(
            3,
            "That would be great! Could you tell me about the rent and amenities?",
            now - Duration::minutes(30),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deliver_accepts_ordinary_messages() {
        assert!(deliver("conv-sarah", "see you at 6").is_ok());
    }

    #[test]
    fn deliver_rejects_oversized_messages() {
        let text = "a".repeat(MAX_MESSAGE_LEN + 1);
        assert!(deliver("conv-sarah", &text).is_err());
    }

    #[test]
    fn deliver_rejects_missing_conversation() {
        assert!(deliver("", "hello").is_err());
    }

    #[test]
    fn seed_messages_are_chronological() {
        let now = Local::now();
        let messages = seed_messages(now);
        assert!(messages.windows(2).all(|w| w[0].sent_at <= w[1].sent_at));
    }
}
