//! Telegram webhook receiver.
//!
//! Decodes the update, runs the command pipeline to completion and answers
//! with a short plain-text diagnostic. The status is always `200` once the
//! origin check passes, because Telegram re-delivers updates on any other
//! status and a failing command would otherwise be retried forever.

use axum::body::Bytes;
use axum::extract::State;
use tracing::Instrument;
use uuid::Uuid;

use repobot_infra::telegram::Update;

use crate::http::extractors::auth::TelegramOrigin;
use crate::state::AppState;

/// POST {webhook_path} - Receive a Telegram update.
pub async fn receive_update(
    State(state): State<AppState>,
    _origin: TelegramOrigin,
    body: Bytes,
) -> String {
    let request_id = Uuid::now_v7();
    let span = tracing::info_span!(
        "webhook",
        %request_id,
        chat_id = tracing::field::Empty
    );

    async move {
        let update: Update = match serde_json::from_slice(&body) {
            Ok(update) => update,
            Err(e) => {
                tracing::warn!(error = %e, "could not decode incoming update");
                return String::new();
            }
        };

        let update_id = update.update_id;
        let Some(event) = update.into_event() else {
            tracing::debug!(update_id, "update carries no message, ignoring");
            return String::new();
        };
        tracing::Span::current().record("chat_id", event.chat_id().0);
        tracing::info!(update_id, "incoming update");

        match state.pipeline.handle(&event).await {
            Ok(outcome) => outcome.diagnostic(),
            Err(failure) => failure.diagnostic(),
        }
    }
    .instrument(span)
    .await
}
