//! Environment secret resolution.
//!
//! Tokens are read once at startup and handed to the clients as
//! [`secrecy::SecretString`]; they are never stored in `BotConfig`.

pub mod env;

pub use env::{optional_secret, required_secret};
