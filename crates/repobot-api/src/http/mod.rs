//! HTTP layer for repobot.
//!
//! Axum-based webhook receiver for Telegram updates plus a health probe.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
