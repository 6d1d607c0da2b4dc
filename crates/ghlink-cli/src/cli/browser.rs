//! Hands a URL to the platform's default browser.

use anyhow::{bail, Context, Result};
use std::process::{Command, Stdio};

/// Program and arguments that open `url` on this platform, if any.
fn opener_command(url: &str) -> Option<(&'static str, Vec<String>)> {
    if cfg!(target_os = "macos") {
        Some(("open", vec![url.to_string()]))
    } else if cfg!(target_os = "windows") {
        Some((
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        ))
    } else if cfg!(unix) {
        Some(("xdg-open", vec![url.to_string()]))
    } else {
        None
    }
}

/// Spawns the opener and returns without waiting for the browser.
pub fn open_in_browser(url: &str) -> Result<()> {
    let Some((program, args)) = opener_command(url) else {
        bail!("opening a browser is unsupported on this platform");
    };

    Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("launch {program}"))?;
    tracing::debug!("launched {} for {}", program, url);
    Ok(())
}
