//! Command parsing and response pipeline for repobot.
//!
//! This crate defines the engine that turns a chat event into chat replies,
//! plus the "ports" (`RepoSearch`, `ChatTransport`) that the infrastructure
//! layer implements. It depends only on `repobot-types` -- never on
//! `repobot-infra` or any network crate.

pub mod chat;
pub mod command;
pub mod response;
pub mod search;
pub mod service;
