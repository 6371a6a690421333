//! Chat-side types: inbound events and outbound delivery receipts.
//!
//! A [`ChatEvent`] is the only thing the command pipeline knows about an
//! inbound webhook call. Platform payloads are converted into it at the edge.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Identity of a conversation on the messaging platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId(id)
    }
}

/// One inbound message notification.
///
/// Built once per webhook call and discarded when the request completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEvent {
    chat_id: ChatId,
    raw_text: String,
}

impl ChatEvent {
    pub fn new(chat_id: impl Into<ChatId>, raw_text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            raw_text: raw_text.into(),
        }
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

/// Acknowledgement returned by the chat transport for a delivered message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Platform message id, when the transport reports one.
    pub message_id: Option<i64>,
}
