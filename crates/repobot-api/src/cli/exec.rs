//! `repobot exec`: run one command through the real search client and print
//! the replies to stdout instead of sending them to Telegram.

use anyhow::{Context, Result};
use console::style;

use repobot_core::response::selector::Selector;
use repobot_core::service::pipeline::{CommandPipeline, PipelineOutcome};
use repobot_infra::console::ConsoleTransport;
use repobot_infra::github::GithubSearchClient;
use repobot_infra::secret::optional_secret;
use repobot_types::chat::ChatEvent;
use repobot_types::config::BotConfig;

pub async fn exec(config: &BotConfig, text: String, chat_id: i64) -> Result<()> {
    let search = GithubSearchClient::new(&config.github, optional_secret(&config.github.token_env))
        .context("failed to create GitHub search client")?;
    let selector = Selector::from_config(&config.trending)?;
    let pipeline = CommandPipeline::new(search, ConsoleTransport::stdout(), selector)
        .with_period(config.trending.period);

    let event = ChatEvent::new(chat_id, text);
    match pipeline.handle(&event).await {
        Ok(PipelineOutcome::Ignored) => {
            println!(
                "  {} Not a command; try {} or {}",
                style("?").yellow(),
                style("/search <repo> [lang:<l>] [author:<a>]").cyan(),
                style("/trend [topic]").cyan()
            );
        }
        Ok(PipelineOutcome::Searched { .. }) => {}
        Ok(PipelineOutcome::Trending {
            summary,
            render_failures,
        }) => {
            println!(
                "  {} {} delivered, {} skipped",
                style("✓").green().bold(),
                summary.delivered(),
                render_failures.len() + summary.failed()
            );
        }
        Err(failure) => {
            eprintln!("  {} {}", style("✗").red().bold(), failure.diagnostic());
            anyhow::bail!(failure);
        }
    }

    Ok(())
}
