//! CLI command definitions and dispatch for the `repobot` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod check_config;
pub mod exec;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Telegram bot that answers GitHub repository searches.
#[derive(Parser)]
#[command(name = "repobot", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Read configuration from this file instead of `$REPOBOT_HOME/config.toml`.
    #[arg(long, global = true, env = "REPOBOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter derived from `-v` / `--quiet`.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,repobot=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the webhook server.
    Serve {
        /// Port to listen on (overrides `server.port`).
        #[arg(short, long, env = "REPOBOT_PORT")]
        port: Option<u16>,

        /// Host to bind to (overrides `server.host`).
        #[arg(long, env = "REPOBOT_HOST")]
        host: Option<String>,

        /// Also export spans through OpenTelemetry (stdout exporter).
        #[arg(long)]
        otel: bool,
    },

    /// Run one chat command locally and print the replies.
    Exec {
        /// Message text, e.g. "/search dblab lang:go".
        text: String,

        /// Chat id reported in the printed replies.
        #[arg(long, default_value_t = 0)]
        chat_id: i64,
    },

    /// Load, validate and print the effective configuration.
    CheckConfig,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_serve_overrides() {
        let cli = Cli::parse_from(["repobot", "serve", "--port", "9000", "--otel"]);
        match cli.command {
            Commands::Serve { port, host, otel } => {
                assert_eq!(port, Some(9000));
                assert!(host.is_none());
                assert!(otel);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn parse_exec_with_chat_id() {
        let cli = Cli::parse_from(["repobot", "-v", "exec", "/trend rust", "--chat-id", "12"]);
        assert_eq!(cli.log_filter(), "info,repobot=debug");
        match cli.command {
            Commands::Exec { text, chat_id } => {
                assert_eq!(text, "/trend rust");
                assert_eq!(chat_id, 12);
            }
            _ => panic!("expected exec"),
        }
    }

    #[test]
    fn quiet_lowers_filter() {
        let cli = Cli::parse_from(["repobot", "--quiet", "check-config"]);
        assert_eq!(cli.log_filter(), "error");
    }
}
