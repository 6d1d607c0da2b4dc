//! Shared lookup for `url` and `open`, and the outcome → output mapping.

use anyhow::{Context, Result};
use ghlink_core::config::GhlinkConfig;
use ghlink_core::git::GitCli;
use ghlink_core::resolve::{Locator, Resolution};
use std::process::ExitCode;

use crate::cli::{error_message, TargetArgs};

/// Shown for every "no URL available" outcome, whatever the underlying reason.
pub const NO_URL_MESSAGE: &str = "Could not determine GitHub URL for this file. \
Make sure this is a Git repository with a GitHub remote.";

/// Runs the lookup for `target`. Not-resolvable reasons have already been
/// logged by the time this returns.
pub async fn lookup(cfg: &GhlinkConfig, target: &TargetArgs) -> Result<Resolution> {
    let file = match &target.path {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("determine current directory")?,
    };

    let locator = Locator::new(GitCli::from_config(cfg));
    match &target.root {
        Some(root) => locator.locate_in(root, &file).await,
        None => locator.locate(&file).await,
    }
    .with_context(|| format!("resolve GitHub URL for {}", file.display()))
}

/// What the CLI prints for one lookup.
#[derive(Debug, PartialEq, Eq)]
pub enum Report {
    /// URL goes to stdout, exit 0.
    Found(String),
    /// Generic message on stderr, exit 1.
    NoUrl,
    /// `ghlink error: ...` on stderr, exit 1.
    Failed(String),
}

impl Report {
    pub fn from_lookup(result: Result<Resolution>) -> Self {
        match result {
            Ok(Resolution::Found(url)) => Report::Found(url),
            Ok(Resolution::NotResolvable(_)) => Report::NoUrl,
            Err(err) => Report::Failed(error_message(&err)),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Report::Found(_) => 0,
            Report::NoUrl | Report::Failed(_) => 1,
        }
    }

    pub fn stderr_message(&self) -> Option<&str> {
        match self {
            Report::Found(_) => None,
            Report::NoUrl => Some(NO_URL_MESSAGE),
            Report::Failed(message) => Some(message),
        }
    }

    /// Prints the report and returns the matching exit code.
    pub fn emit(&self) -> ExitCode {
        if let Report::Found(url) = self {
            println!("{url}");
        }
        if let Some(message) = self.stderr_message() {
            eprintln!("{message}");
        }
        ExitCode::from(self.exit_code())
    }
}
