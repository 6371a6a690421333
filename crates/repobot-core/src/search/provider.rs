//! RepoSearch trait definition.
//!
//! This is the port the pipeline uses to reach the code-hosting search
//! service. Uses native async fn in traits (RPITIT, Rust 2024 edition).
//!
//! Implementations live in repobot-infra (e.g., `GithubSearchClient`).

use std::future::Future;

use repobot_types::error::SearchError;
use repobot_types::repo::{RepoRecord, SearchQuery, TrendingPeriod};

/// Trait for repository search backends.
pub trait RepoSearch: Send + Sync {
    /// Find the single best match for a query.
    ///
    /// Returns `SearchError::NotFound` when nothing matches.
    fn find_repository(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<RepoRecord, SearchError>> + Send;

    /// List repositories trending within `period`, optionally narrowed by a
    /// free-text `topic` (empty for no narrowing).
    ///
    /// The result keeps the service's ordering (most popular first).
    fn find_trending(
        &self,
        period: TrendingPeriod,
        topic: &str,
    ) -> impl Future<Output = Result<Vec<RepoRecord>, SearchError>> + Send;
}
