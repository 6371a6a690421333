//! Shaping search results into chat messages.
//!
//! - `selector`: shuffle-then-truncate policy for trending candidates
//! - `renderer`: fixed, fail-closed message template

pub mod renderer;
pub mod selector;
