//! GithubSearchClient -- concrete [`RepoSearch`] implementation for GitHub.
//!
//! Both lookups go through `GET /search/repositories`. The optional token is
//! wrapped in [`secrecy::SecretString`] and is only exposed when building the
//! `Authorization` header.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};

use repobot_core::search::provider::RepoSearch;
use repobot_types::config::GithubConfig;
use repobot_types::error::SearchError;
use repobot_types::repo::{RepoRecord, SearchQuery, TrendingPeriod};

use super::query::{repository_query, trending_query};
use super::types::{ApiErrorBody, SearchResponse};

/// GitHub REST search client.
pub struct GithubSearchClient {
    client: reqwest::Client,
    token: Option<SecretString>,
    base_url: String,
    trending_per_page: u32,
}

impl GithubSearchClient {
    const API_VERSION: &'static str = "2022-11-28";
    const MEDIA_TYPE: &'static str = "application/vnd.github+json";

    /// Build a client from the `[github]` config section.
    ///
    /// Without a token requests are anonymous and subject to the lower
    /// unauthenticated rate limit.
    pub fn new(config: &GithubConfig, token: Option<SecretString>) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SearchError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            token,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            trending_per_page: config.trending_per_page,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    async fn search(&self, params: &[(&str, String)]) -> Result<SearchResponse, SearchError> {
        let url = format!("{}/search/repositories", self.base_url);

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, Self::MEDIA_TYPE)
            .header("X-GitHub-Api-Version", Self::API_VERSION)
            .query(params);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token.expose_secret()));
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %message, "GitHub search request rejected");
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        if parsed.incomplete_results {
            tracing::debug!(total = parsed.total_count, "GitHub returned incomplete results");
        }
        Ok(parsed)
    }
}

// No Debug derive: the token must never end up in logs.

impl RepoSearch for GithubSearchClient {
    async fn find_repository(&self, query: &SearchQuery) -> Result<RepoRecord, SearchError> {
        let q = repository_query(query);
        tracing::debug!(q = %q, "searching repository");

        let response = self
            .search(&[("q", q.clone()), ("per_page", "1".to_string())])
            .await?;

        response
            .items
            .into_iter()
            .next()
            .ok_or(SearchError::NotFound(q))
    }

    async fn find_trending(
        &self,
        period: TrendingPeriod,
        topic: &str,
    ) -> Result<Vec<RepoRecord>, SearchError> {
        let today = chrono::Utc::now().date_naive();
        let q = trending_query(period, topic, today);
        tracing::debug!(q = %q, period = %period, "searching trending repositories");

        let response = self
            .search(&[
                ("q", q),
                ("sort", "stars".to_string()),
                ("order", "desc".to_string()),
                ("per_page", self.trending_per_page.to_string()),
            ])
            .await?;

        tracing::debug!(
            total = response.total_count,
            returned = response.items.len(),
            "trending lookup finished"
        );
        Ok(response.items)
    }
}
