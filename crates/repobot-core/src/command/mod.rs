//! Command language: recognizing command tokens and parsing `/search` qualifiers.

pub mod dispatcher;
pub mod extractor;

/// Token selecting the single-repository search handler.
pub const SEARCH_COMMAND: &str = "/search";

/// Token selecting the trending handler.
pub const TREND_COMMAND: &str = "/trend";
