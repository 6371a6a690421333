//! Configuration loader for repobot.
//!
//! Reads `config.toml` from the config directory (`~/.repobot/` unless
//! `REPOBOT_HOME` says otherwise) and deserializes it into [`BotConfig`].
//! The implicit location falls back to defaults when the file is missing or
//! malformed; an explicitly named file must exist and parse.

use std::path::{Path, PathBuf};

use repobot_types::config::BotConfig;
use repobot_types::error::ConfigError;

/// Environment variable overriding the config directory.
pub const HOME_ENV: &str = "REPOBOT_HOME";

/// File name looked up inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the config directory.
///
/// Priority:
/// 1. `REPOBOT_HOME` environment variable
/// 2. `~/.repobot`
/// 3. `.repobot` in the current directory
pub fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".repobot");
    }

    PathBuf::from(".repobot")
}

/// Load configuration from `{config_dir}/config.toml`.
///
/// - If the file does not exist, returns [`BotConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
pub async fn load_config(config_dir: &Path) -> BotConfig {
    let config_path = config_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return BotConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return BotConfig::default();
        }
    };

    match toml::from_str::<BotConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            BotConfig::default()
        }
    }
}

/// Load configuration from an explicitly named file. Any failure is an error.
pub async fn load_config_file(path: &Path) -> Result<BotConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    toml::from_str::<BotConfig>(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load and validate the effective configuration.
///
/// `explicit` is the `--config` path, if one was given.
pub async fn load_effective_config(explicit: Option<&Path>) -> Result<BotConfig, ConfigError> {
    let config = match explicit {
        Some(path) => load_config_file(path).await?,
        None => load_config(&resolve_config_dir()).await,
    };
    config.validate()?;
    Ok(config)
}
