//! ConsoleTransport -- a [`ChatTransport`] that writes messages to a local
//! writer (stdout by default) instead of a chat platform.
//!
//! Used by `repobot exec` to try commands without a bot token.

use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use repobot_core::chat::transport::ChatTransport;
use repobot_types::chat::{ChatId, DeliveryReceipt};
use repobot_types::error::DeliveryError;

const SEPARATOR: &str = "-------------";

pub struct ConsoleTransport {
    out: Mutex<Box<dyn Write + Send>>,
    next_id: AtomicI64,
}

impl ConsoleTransport {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    fn write(&self, chat_id: ChatId, text: &str) -> Result<i64, DeliveryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut out = self
            .out
            .lock()
            .map_err(|_| DeliveryError::Transport("console writer poisoned".to_string()))?;
        writeln!(out, "[chat {chat_id} #{id}]\n{text}\n{SEPARATOR}")
            .and_then(|_| out.flush())
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;
        Ok(id)
    }
}

impl ChatTransport for ConsoleTransport {
    fn name(&self) -> &str {
        "console"
    }

    async fn deliver_message(
        &self,
        chat_id: ChatId,
        text: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let id = self.write(chat_id, text)?;
        Ok(DeliveryReceipt {
            message_id: Some(id),
        })
    }
}
