//! Chat widget transcript entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat transcript entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// The student typing into the widget.
    User,
    /// The campus assistant.
    Model,
}

impl ChatRole {
    /// Role name as used by the Gemini API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// A single entry of the chat widget transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Stable identifier used as the render key.
    pub id: Uuid,
    /// Author of the message.
    pub role: ChatRole,
    /// Message body as displayed.
    pub text: String,
    /// Time the entry was appended.
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a message authored by the student.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    /// Creates a message authored by the assistant.
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text)
    }

    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    /// Whether the student wrote this entry.
    #[must_use]
    pub const fn is_from_user(&self) -> bool {
        matches!(self.role, ChatRole::User)
    }
}
