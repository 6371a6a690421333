//! Repository search abstractions.

pub mod provider;
