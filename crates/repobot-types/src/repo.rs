//! Repository search types.
//!
//! [`SearchQuery`] is what the `/search` command parses into; [`RepoRecord`]
//! is the read-only value returned by the search service. Every record field
//! is optional on the wire so that the renderer can fail closed on gaps.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::ExtractError;

/// Structured form of a `/search <name> [lang:<l>] [author:<a>]` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    repo_name: String,
    language: Option<String>,
    author: Option<String>,
}

impl SearchQuery {
    /// Build a query. Fails with `MissingRepoName` when the name is blank.
    ///
    /// Empty qualifiers are normalized to `None`.
    pub fn new(
        repo_name: impl Into<String>,
        language: Option<String>,
        author: Option<String>,
    ) -> Result<Self, ExtractError> {
        let repo_name = repo_name.into();
        if repo_name.trim().is_empty() {
            return Err(ExtractError::MissingRepoName(repo_name));
        }
        Ok(Self {
            repo_name,
            language: language.filter(|l| !l.is_empty()),
            author: author.filter(|a| !a.is_empty()),
        })
    }

    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    /// The language qualifier, or `""` when absent.
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or_default()
    }

    /// The author qualifier, or `""` when absent.
    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or_default()
    }

    /// `(name, language, author)` with absent qualifiers as empty strings.
    pub fn as_triple(&self) -> (&str, &str, &str) {
        (self.repo_name(), self.language(), self.author())
    }
}

/// Owner of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoOwner {
    #[serde(default)]
    pub login: Option<String>,
}

/// A repository as returned by the search service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<RepoOwner>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl RepoRecord {
    pub fn owner_login(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|o| o.login.as_deref())
    }
}

/// Window used by the trending lookup: repositories created within it,
/// ordered by stars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendingPeriod {
    #[default]
    Day,
    Week,
    Month,
}

impl TrendingPeriod {
    /// The creation-date lower bound for a lookup made on `today`.
    pub fn created_after(&self, today: NaiveDate) -> NaiveDate {
        let earlier = match self {
            TrendingPeriod::Day => today.checked_sub_days(Days::new(1)),
            TrendingPeriod::Week => today.checked_sub_days(Days::new(7)),
            TrendingPeriod::Month => today.checked_sub_months(Months::new(1)),
        };
        earlier.unwrap_or(today)
    }
}

impl fmt::Display for TrendingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendingPeriod::Day => write!(f, "day"),
            TrendingPeriod::Week => write!(f, "week"),
            TrendingPeriod::Month => write!(f, "month"),
        }
    }
}

impl FromStr for TrendingPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "today" => Ok(TrendingPeriod::Day),
            "week" => Ok(TrendingPeriod::Week),
            "month" => Ok(TrendingPeriod::Month),
            other => Err(format!("invalid trending period: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_requires_name() {
        assert!(matches!(
            SearchQuery::new("  ", None, None),
            Err(ExtractError::MissingRepoName(_))
        ));
    }

    #[test]
    fn test_search_query_normalizes_empty_qualifiers() {
        let query =
            SearchQuery::new("dblab", Some(String::new()), Some("danvergara".to_string())).unwrap();
        assert_eq!(query.as_triple(), ("dblab", "", "danvergara"));
    }

    #[test]
    fn test_repo_record_deserializes_github_item() {
        let json = r#"{
            "full_name": "danvergara/dblab",
            "description": "The database client every command line junkie deserves.",
            "owner": {"login": "danvergara", "id": 1},
            "stargazers_count": 700,
            "html_url": "https://github.com/danvergara/dblab",
            "language": "Go",
            "forks": 12
        }"#;
        let record: RepoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.owner_login(), Some("danvergara"));
        assert_eq!(record.stargazers_count, Some(700));
    }

    #[test]
    fn test_repo_record_tolerates_null_description() {
        let record: RepoRecord =
            serde_json::from_str(r#"{"full_name": "a/b", "description": null}"#).unwrap();
        assert!(record.description.is_none());
        assert!(record.owner_login().is_none());
    }

    #[test]
    fn test_trending_period_created_after() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(
            TrendingPeriod::Day.created_after(today),
            NaiveDate::from_ymd_opt(2024, 3, 30).unwrap()
        );
        assert_eq!(
            TrendingPeriod::Week.created_after(today),
            NaiveDate::from_ymd_opt(2024, 3, 24).unwrap()
        );
        assert_eq!(
            TrendingPeriod::Month.created_after(today),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_trending_period_roundtrip() {
        for period in [TrendingPeriod::Day, TrendingPeriod::Week, TrendingPeriod::Month] {
            let parsed: TrendingPeriod = period.to_string().parse().unwrap();
            assert_eq!(parsed, period);
        }
        assert_eq!("today".parse::<TrendingPeriod>().unwrap(), TrendingPeriod::Day);
    }
}
