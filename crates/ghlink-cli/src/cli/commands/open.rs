//! `ghlink open [PATH]` – open the GitHub URL of a file in the browser.

use anyhow::Result;
use ghlink_core::config::GhlinkConfig;
use std::process::ExitCode;

use super::lookup::{lookup, Report};
use crate::cli::browser::open_in_browser;
use crate::cli::TargetArgs;

pub async fn run_open(cfg: &GhlinkConfig, target: &TargetArgs) -> Result<ExitCode> {
    let report = Report::from_lookup(lookup(cfg, target).await);
    let code = report.emit();
    if let Report::Found(url) = &report {
        open_in_browser(url)?;
    }
    Ok(code)
}
