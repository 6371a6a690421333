//! Inbound webhook payloads.
//!
//! Only the fields the pipeline consumes are modelled; everything else in
//! the Telegram `Update` object is ignored by serde.

use serde::Deserialize;

use repobot_types::chat::ChatEvent;

/// One webhook delivery from Telegram.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: i64,
    /// Absent for edited messages, callback queries and other update kinds.
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub message_id: Option<i64>,
    /// Absent for stickers, photos without captions, etc.
    #[serde(default)]
    pub text: Option<String>,
    pub chat: Chat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Update {
    /// The chat id this update belongs to, if it carries a message.
    pub fn chat_id(&self) -> Option<i64> {
        self.message.as_ref().map(|m| m.chat.id)
    }

    /// Convert into the pipeline's event type.
    ///
    /// Updates without a message yield `None`; a message without text
    /// becomes an event with empty text, which the dispatcher ignores.
    pub fn into_event(self) -> Option<ChatEvent> {
        let message = self.message?;
        Some(ChatEvent::new(
            message.chat.id,
            message.text.unwrap_or_default(),
        ))
    }
}
