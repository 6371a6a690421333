//! ChatTransport trait definition.
//!
//! The outbound port of the pipeline: one call delivers one text message to
//! one chat. Implementations live in repobot-infra (`TelegramTransport`,
//! `ConsoleTransport`).

use std::future::Future;

use repobot_types::chat::{ChatId, DeliveryReceipt};
use repobot_types::error::DeliveryError;

/// Trait for chat delivery backends.
pub trait ChatTransport: Send + Sync {
    /// Short name used in logs (e.g., "telegram").
    fn name(&self) -> &str;

    /// Deliver `text` to `chat_id`. No retries are expected of implementations.
    fn deliver_message(
        &self,
        chat_id: ChatId,
        text: &str,
    ) -> impl Future<Output = Result<DeliveryReceipt, DeliveryError>> + Send;
}
