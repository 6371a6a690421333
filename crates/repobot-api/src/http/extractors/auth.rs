//! Webhook secret token extractor.
//!
//! When a secret is registered with `setWebhook`, Telegram echoes it in the
//! `X-Telegram-Bot-Api-Secret-Token` header of every update. This proves the
//! request came from Telegram; it says nothing about the chat user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::http::error::AppError;
use crate::state::AppState;

/// Header Telegram uses to echo the webhook secret.
pub const SECRET_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Verified-origin marker. Extracting this checks the secret header when a
/// secret is configured and is a no-op otherwise.
pub struct TelegramOrigin;

impl FromRequestParts<AppState> for TelegramOrigin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.webhook_secret.as_deref() else {
            return Ok(TelegramOrigin);
        };

        let provided = parts
            .headers
            .get(SECRET_HEADER)
            .and_then(|v| v.to_str().ok());

        match provided {
            Some(token) if constant_time_eq(token.as_bytes(), expected.as_bytes()) => {
                Ok(TelegramOrigin)
            }
            Some(_) => {
                tracing::warn!("webhook called with a wrong secret token");
                Err(AppError::Unauthorized("Invalid webhook secret token".to_string()))
            }
            None => {
                tracing::warn!("webhook called without a secret token");
                Err(AppError::Unauthorized(format!(
                    "Missing {SECRET_HEADER} header"
                )))
            }
        }
    }
}

/// Compare without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
