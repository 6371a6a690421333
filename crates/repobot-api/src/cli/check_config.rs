//! `repobot check-config`: show the effective configuration.
//!
//! Tokens are never printed; only whether their variable is set.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use repobot_infra::config::resolve_config_dir;
use repobot_infra::secret::optional_secret;
use repobot_types::config::BotConfig;

pub fn check_config(config: &BotConfig, explicit: Option<&Path>) -> Result<()> {
    let source = match explicit {
        Some(path) => path.display().to_string(),
        None => resolve_config_dir().join("config.toml").display().to_string(),
    };

    println!();
    println!(
        "  {} repobot v{} ({})",
        style("⚙").bold(),
        env!("CARGO_PKG_VERSION"),
        style(source).dim()
    );
    println!();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Setting").fg(Color::White),
        Cell::new("Value").fg(Color::White),
    ]);

    let rows: Vec<(&str, String)> = vec![
        ("server.host", config.server.host.clone()),
        ("server.port", config.server.port.to_string()),
        ("server.webhook_path", config.server.webhook_path.clone()),
        ("telegram.api_base_url", config.telegram.api_base_url.clone()),
        ("telegram.token_env", token_status(&config.telegram.token_env)),
        (
            "telegram.webhook_secret",
            if config.telegram.webhook_secret.is_some() {
                "(set)".to_string()
            } else {
                "(none)".to_string()
            },
        ),
        ("telegram.timeout_secs", config.telegram.timeout_secs.to_string()),
        ("github.api_base_url", config.github.api_base_url.clone()),
        ("github.token_env", token_status(&config.github.token_env)),
        ("github.user_agent", config.github.user_agent.clone()),
        ("github.timeout_secs", config.github.timeout_secs.to_string()),
        (
            "github.trending_per_page",
            config.github.trending_per_page.to_string(),
        ),
        ("trending.cap", config.trending.cap.to_string()),
        ("trending.shuffle", config.trending.shuffle.to_string()),
        (
            "trending.seed",
            config
                .trending
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "(random)".to_string()),
        ),
        ("trending.period", config.trending.period.to_string()),
    ];

    for (key, value) in rows {
        table.add_row(vec![Cell::new(key).fg(Color::Cyan), Cell::new(value)]);
    }

    println!("{table}");
    println!();
    println!("  {} configuration is valid", style("✓").green().bold());
    println!();
    Ok(())
}

fn token_status(var: &str) -> String {
    if optional_secret(var).is_some() {
        format!("{var} (set)")
    } else {
        format!("{var} (not set)")
    }
}
