//! Application state wiring the pipeline to its concrete adapters.
//!
//! `CommandPipeline` is generic over its search and transport ports;
//! AppState pins it to the GitHub and Telegram implementations.

use std::sync::Arc;

use anyhow::Context;
use secrecy::SecretString;

use repobot_core::response::selector::Selector;
use repobot_core::service::pipeline::CommandPipeline;
use repobot_infra::github::GithubSearchClient;
use repobot_infra::secret::{optional_secret, required_secret};
use repobot_infra::telegram::TelegramTransport;
use repobot_types::config::BotConfig;

/// Concrete pipeline used by the webhook server.
pub type ConcretePipeline = CommandPipeline<GithubSearchClient, TelegramTransport>;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ConcretePipeline>,
    /// Expected `X-Telegram-Bot-Api-Secret-Token`; `None` disables the check.
    pub webhook_secret: Option<Arc<str>>,
}

impl AppState {
    /// Wire the pipeline from config, reading tokens from the environment.
    pub fn init(config: &BotConfig) -> anyhow::Result<Self> {
        let bot_token = required_secret(&config.telegram.token_env)
            .context("the Telegram bot token is required to serve webhooks")?;
        let github_token = optional_secret(&config.github.token_env);
        if github_token.is_none() {
            tracing::info!(
                var = %config.github.token_env,
                "no GitHub token set, searching anonymously"
            );
        }
        Self::from_parts(config, bot_token, github_token)
    }

    /// Wire the pipeline with explicit tokens.
    pub fn from_parts(
        config: &BotConfig,
        bot_token: SecretString,
        github_token: Option<SecretString>,
    ) -> anyhow::Result<Self> {
        let search = GithubSearchClient::new(&config.github, github_token)
            .context("failed to create GitHub search client")?;
        let transport = TelegramTransport::new(&config.telegram, bot_token)
            .context("failed to create Telegram transport")?;
        let selector = Selector::from_config(&config.trending)?;

        let pipeline =
            CommandPipeline::new(search, transport, selector).with_period(config.trending.period);

        Ok(Self {
            pipeline: Arc::new(pipeline),
            webhook_secret: config.telegram.webhook_secret.as_deref().map(Arc::from),
        })
    }
}
