//! Shared domain types for repobot.
//!
//! This crate contains the types passed between the command pipeline and its
//! collaborators: chat events, search queries, repository records, the global
//! configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod repo;
