//! Infrastructure layer for repobot.
//!
//! Contains implementations of the ports defined in `repobot-core`:
//! the GitHub search client, the Telegram and console chat transports,
//! plus the Telegram webhook payload types, config file loading and
//! environment secret resolution.

pub mod config;
pub mod console;
pub mod github;
pub mod secret;
pub mod telegram;
