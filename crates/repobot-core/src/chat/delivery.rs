//! DeliveryCoordinator: sends rendered messages through a [`ChatTransport`].
//!
//! Batches are sent sequentially in batch order. A failed item is recorded
//! and the remaining items are still attempted; nothing is retried.

use repobot_types::chat::{ChatId, DeliveryReceipt};
use repobot_types::error::DeliveryError;

use crate::response::renderer::RenderedMessage;

use super::transport::ChatTransport;

/// One message that the transport did not accept.
#[derive(Debug)]
pub struct DeliveryFailure {
    /// Position within the batch.
    pub index: usize,
    pub error: DeliveryError,
}

/// Outcome of a batch send.
#[derive(Debug, Default)]
pub struct DeliverySummary {
    pub attempted: usize,
    pub receipts: Vec<DeliveryReceipt>,
    pub failures: Vec<DeliveryFailure>,
}

impl DeliverySummary {
    pub fn delivered(&self) -> usize {
        self.receipts.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// `Ok` when every message went out, `DeliveryError::Partial` otherwise.
    pub fn verdict(&self) -> Result<(), DeliveryError> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(DeliveryError::Partial {
                failed: self.failures.len(),
                attempted: self.attempted,
            })
        }
    }
}

/// Sends messages to one chat on behalf of the pipeline.
pub struct DeliveryCoordinator<T: ChatTransport> {
    transport: T,
}

impl<T: ChatTransport> DeliveryCoordinator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Deliver a single message; the transport's error is returned as-is.
    pub async fn deliver_one(
        &self,
        chat_id: ChatId,
        message: &RenderedMessage,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let receipt = self
            .transport
            .deliver_message(chat_id, message.as_str())
            .await?;
        tracing::debug!(
            transport = self.transport.name(),
            chat_id = %chat_id,
            message_id = ?receipt.message_id,
            "message delivered"
        );
        Ok(receipt)
    }

    /// Deliver every message in order, continuing past failures.
    pub async fn deliver_batch(
        &self,
        chat_id: ChatId,
        messages: &[RenderedMessage],
    ) -> DeliverySummary {
        let mut summary = DeliverySummary {
            attempted: messages.len(),
            ..Default::default()
        };

        for (index, message) in messages.iter().enumerate() {
            match self.deliver_one(chat_id, message).await {
                Ok(receipt) => summary.receipts.push(receipt),
                Err(error) => {
                    tracing::warn!(
                        transport = self.transport.name(),
                        chat_id = %chat_id,
                        index,
                        error = %error,
                        "batch item delivery failed, continuing"
                    );
                    summary.failures.push(DeliveryFailure { index, error });
                }
            }
        }

        tracing::info!(
            chat_id = %chat_id,
            attempted = summary.attempted,
            delivered = summary.delivered(),
            failed = summary.failed(),
            "batch delivery finished"
        );
        summary
    }

    /// Tell the user something went wrong. Failures are logged, not returned.
    pub async fn notify_error(&self, chat_id: ChatId, text: &str) {
        if let Err(e) = self.transport.deliver_message(chat_id, text).await {
            tracing::warn!(
                transport = self.transport.name(),
                chat_id = %chat_id,
                error = %e,
                "could not notify chat about a failed command"
            );
        }
    }
}
