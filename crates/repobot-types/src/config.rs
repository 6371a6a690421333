//! Global configuration types for repobot.
//!
//! `BotConfig` represents the top-level `config.toml`. Every section and field
//! has a default, so an empty file (or no file) is a valid configuration.
//! Tokens are never stored here; only the names of the environment variables
//! they are read from.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::repo::TrendingPeriod;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub trending: TrendingConfig,
}

impl BotConfig {
    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trending.cap == 0 {
            return Err(ConfigError::Invalid(
                "trending.cap must be at least 1".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must not be 0".to_string()));
        }
        if !self.server.webhook_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "server.webhook_path must start with '/', got '{}'",
                self.server.webhook_path
            )));
        }
        if self.github.trending_per_page == 0 || self.github.trending_per_page > 100 {
            return Err(ConfigError::Invalid(
                "github.trending_per_page must be between 1 and 100".to_string(),
            ));
        }
        Ok(())
    }
}

/// HTTP listener settings for the webhook server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_webhook_path")]
    pub webhook_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_webhook_path() -> String {
    "/webhook/telegram".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            webhook_path: default_webhook_path(),
        }
    }
}

/// Telegram Bot API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default = "default_telegram_api")]
    pub api_base_url: String,
    /// Environment variable holding the bot token.
    #[serde(default = "default_telegram_token_env")]
    pub token_env: String,
    /// Expected `X-Telegram-Bot-Api-Secret-Token` header value, if any.
    #[serde(default)]
    pub webhook_secret: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_telegram_api() -> String {
    "https://api.telegram.org".to_string()
}

fn default_telegram_token_env() -> String {
    "GITHUB_BOT_TOKEN".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_telegram_api(),
            token_env: default_telegram_token_env(),
            webhook_secret: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// GitHub search API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_github_api")]
    pub api_base_url: String,
    /// Optional environment variable holding a GitHub token (raises rate limits).
    #[serde(default = "default_github_token_env")]
    pub token_env: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// How many candidates the trending lookup asks for.
    #[serde(default = "default_trending_per_page")]
    pub trending_per_page: u32,
}

fn default_github_api() -> String {
    "https://api.github.com".to_string()
}

fn default_github_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_user_agent() -> String {
    concat!("repobot/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_trending_per_page() -> u32 {
    30
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_github_api(),
            token_env: default_github_token_env(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            trending_per_page: default_trending_per_page(),
        }
    }
}

/// Trending batch policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingConfig {
    /// Maximum number of repositories delivered per `/trend` command.
    #[serde(default = "default_cap")]
    pub cap: usize,
    /// Shuffle candidates before truncating.
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
    /// Fixed RNG seed; `None` draws from OS entropy on every request.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub period: TrendingPeriod,
}

fn default_cap() -> usize {
    5
}

fn default_shuffle() -> bool {
    true
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            cap: default_cap(),
            shuffle: default_shuffle(),
            seed: None,
            period: TrendingPeriod::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_config_default_values() {
        let config = BotConfig::default();
        assert_eq!(config.trending.cap, 5);
        assert!(config.trending.shuffle);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.telegram.token_env, "GITHUB_BOT_TOKEN");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bot_config_deserialize_empty() {
        let config: BotConfig = toml::from_str("").unwrap();
        assert_eq!(config.trending.cap, 5);
        assert_eq!(config.server.webhook_path, "/webhook/telegram");
        assert_eq!(config.github.api_base_url, "https://api.github.com");
    }

    #[test]
    fn test_bot_config_deserialize_with_values() {
        let toml_str = r#"
[server]
port = 9000

[telegram]
webhook_secret = "s3cret"

[trending]
cap = 10
shuffle = false
seed = 7
period = "week"
"#;
        let config: BotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.telegram.webhook_secret.as_deref(), Some("s3cret"));
        assert_eq!(config.trending.cap, 10);
        assert!(!config.trending.shuffle);
        assert_eq!(config.trending.seed, Some(7));
        assert_eq!(config.trending.period, TrendingPeriod::Week);
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let mut config = BotConfig::default();
        config.trending.cap = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_relative_webhook_path() {
        let mut config = BotConfig::default();
        config.server.webhook_path = "webhook".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("webhook_path"));
    }
}
