//! `ghlink url [PATH]` – print the GitHub URL of a file.

use ghlink_core::config::GhlinkConfig;
use std::process::ExitCode;

use super::lookup::{lookup, Report};
use crate::cli::TargetArgs;

pub async fn run_url(cfg: &GhlinkConfig, target: &TargetArgs) -> ExitCode {
    Report::from_lookup(lookup(cfg, target).await).emit()
}
