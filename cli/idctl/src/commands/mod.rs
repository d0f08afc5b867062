//! CLI commands.

mod ancestors;
mod check;
mod decode;
mod encode;
mod kinds;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::{self, Config};
use crate::logging;
use crate::output::OutputFormat;

/// idctl - Decode, build and validate tenant identifiers.
#[derive(Debug, Parser)]
#[command(name = "idctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Overrides the config file.
    #[arg(long, global = true)]
    format: Option<String>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode identifiers and show their ancestry.
    Decode(decode::DecodeCommand),

    /// Build an identifier from its components.
    Encode(encode::EncodeCommand),

    /// List the chain from an identifier up to its customer.
    Ancestors(ancestors::AncestorsCommand),

    /// Validate identifiers without decoding them in full.
    Check(check::CheckCommand),

    /// List identifier kinds and their tags.
    Kinds(kinds::KindsCommand),
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let mut config = Config::load()?;
        logging::init(&config.log_level, self.log_json);
        info!(
            path = ?config::config_path().ok(),
            format = %config.format,
            "loaded configuration"
        );

        if let Some(format) = self.format.as_deref() {
            config.format = format.parse::<OutputFormat>()?;
        }

        let ctx = CommandContext {
            format: config.format,
        };

        match self.command {
            Commands::Decode(cmd) => cmd.run(ctx),
            Commands::Encode(cmd) => cmd.run(ctx),
            Commands::Ancestors(cmd) => cmd.run(ctx),
            Commands::Check(cmd) => cmd.run(ctx),
            Commands::Kinds(cmd) => cmd.run(ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}
