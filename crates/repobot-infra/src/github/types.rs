//! GitHub search API wire types.

use serde::Deserialize;

use repobot_types::repo::RepoRecord;

/// Body of `GET /search/repositories`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<RepoRecord>,
}

/// Error body GitHub returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
