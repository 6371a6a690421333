//! TelegramTransport -- concrete [`ChatTransport`] for the Telegram Bot API.
//!
//! Messages are sent with a form-encoded `POST {base}/bot{token}/sendMessage`.
//! The bot token is part of the URL, so request errors are stripped of their
//! URL before they are logged or returned.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use repobot_core::chat::transport::ChatTransport;
use repobot_types::chat::{ChatId, DeliveryReceipt};
use repobot_types::config::TelegramConfig;
use repobot_types::error::DeliveryError;

/// `sendMessage` response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<SentMessage>,
}

#[derive(Debug, Deserialize)]
struct SentMessage {
    message_id: i64,
}

/// Telegram Bot API client used for outbound messages.
pub struct TelegramTransport {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
}

impl TelegramTransport {
    pub fn new(config: &TelegramConfig, token: SecretString) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DeliveryError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            token,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token.expose_secret(), method)
    }
}

impl ChatTransport for TelegramTransport {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn deliver_message(
        &self,
        chat_id: ChatId,
        text: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let chat_id_param = chat_id.to_string();
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .form(&[("chat_id", chat_id_param.as_str()), ("text", text)])
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DeliveryError::Transport(e.without_url().to_string()))?;
        tracing::debug!(chat_id = %chat_id, status = status.as_u16(), "telegram sendMessage answered");

        // Telegram answers errors with a JSON envelope too, so try that first.
        match serde_json::from_str::<ApiResponse>(&body) {
            Ok(api) if api.ok && status.is_success() => Ok(DeliveryReceipt {
                message_id: api.result.map(|m| m.message_id),
            }),
            Ok(api) => Err(DeliveryError::Rejected(
                api.description
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            )),
            Err(_) if !status.is_success() => {
                Err(DeliveryError::Rejected(format!("HTTP {}: {body}", status.as_u16())))
            }
            Err(e) => Err(DeliveryError::Transport(format!(
                "unexpected sendMessage response: {e}"
            ))),
        }
    }
}
