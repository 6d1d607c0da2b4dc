//! CLI for ghlink.

mod browser;
mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use ghlink_core::config;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_completions, run_man, run_open, run_url};

/// Top-level CLI for ghlink.
#[derive(Debug, Parser)]
#[command(name = "ghlink")]
#[command(about = "Print or open the GitHub URL of a file in a Git working tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// File to look up and, optionally, the repository root that owns it.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// File (or directory) inside a Git working tree. Defaults to the current directory.
    pub path: Option<PathBuf>,

    /// Repository root to use instead of asking git for the top-level directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the GitHub blob URL for a file.
    Url {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Open the GitHub blob URL for a file in the default browser.
    Open {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print a shell completion script.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

/// Message printed for an internal failure; distinct from the "no URL" message.
pub fn error_message(err: &anyhow::Error) -> String {
    format!("ghlink error: {:#}", err)
}

impl CliCommand {
    pub async fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Url { target } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                Ok(run_url(&cfg, &target).await)
            }
            CliCommand::Open { target } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_open(&cfg, &target).await
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(ExitCode::SUCCESS)
            }
            CliCommand::Man => {
                run_man()?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[cfg(test)]
mod tests;
