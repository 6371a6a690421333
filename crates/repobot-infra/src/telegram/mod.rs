//! Telegram Bot API integration.
//!
//! - `update`: inbound webhook payload types and conversion into `ChatEvent`
//! - `transport`: `TelegramTransport`, the outbound `sendMessage` adapter

pub mod transport;
pub mod update;

pub use transport::TelegramTransport;
pub use update::Update;
