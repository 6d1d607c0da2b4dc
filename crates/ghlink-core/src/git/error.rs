//! Error type for git subprocess queries.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single git query. Any of these aborts the lookup; none is retried.
#[derive(Debug, Error)]
pub enum GitError {
    /// The executable could not be started (not installed, bad cwd, permissions).
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// git ran but exited non-zero (no `origin` remote, not a work tree, ...).
    #[error("`git {args}` exited with {}: {stderr}", exit_label(.code))]
    Failed {
        args: String,
        code: Option<i32>,
        stderr: String,
    },
    #[error("`git {args}` timed out after {timeout:?}")]
    TimedOut { args: String, timeout: Duration },
    /// git succeeded but printed nothing usable.
    #[error("`git {args}` produced no output")]
    EmptyOutput { args: String },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
