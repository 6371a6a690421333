//! GitHub repository search.
//!
//! This module provides the [`GithubSearchClient`] which implements the
//! [`RepoSearch`](repobot_core::search::provider::RepoSearch) port against
//! the GitHub REST search API (`/search/repositories`).

pub mod client;
pub mod query;
pub mod types;

pub use client::GithubSearchClient;
