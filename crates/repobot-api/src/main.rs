//! repobot CLI and webhook server entry point.
//!
//! Binary name: `repobot`
//!
//! Parses CLI arguments, loads configuration, then either starts the
//! Telegram webhook server or runs a one-off command locally.

mod cli;
mod http;
mod state;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;
use console::style;

use repobot_observe::tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or logging
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "repobot", &mut std::io::stdout());
        return Ok(());
    }

    let otel = matches!(cli.command, Commands::Serve { otel: true, .. });
    let options = TracingOptions::new(cli.log_filter())
        .with_json(cli.log_json)
        .with_otel(otel);
    init_tracing(&options).map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = repobot_infra::config::load_effective_config(cli.config.as_deref())
        .await
        .context("failed to load configuration")?;

    match cli.command {
        Commands::Serve { port, host, .. } => {
            let state = AppState::init(&config)?;

            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;

            tracing::info!(
                %addr,
                webhook_path = %config.server.webhook_path,
                cap = config.trending.cap,
                "repobot listening"
            );
            if !cli.quiet {
                println!(
                    "  {} repobot listening on {}{}",
                    style("⚡").bold(),
                    style(format!("http://{addr}")).cyan(),
                    config.server.webhook_path
                );
                println!("  {}", style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state, &config.server.webhook_path);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("server stopped");
        }

        Commands::Exec { text, chat_id } => {
            cli::exec::exec(&config, text, chat_id).await?;
        }

        Commands::CheckConfig => {
            cli::check_config::check_config(&config, cli.config.as_deref())?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
