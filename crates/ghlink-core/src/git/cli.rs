//! `GitRunner` backed by the git executable.

use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use super::{GitError, GitRunner};
use crate::config::GhlinkConfig;

/// Runs git as a subprocess with a per-call timeout.
///
/// The child is killed if the timeout elapses (`kill_on_drop`), so a hung git
/// never outlives the lookup.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    timeout: Duration,
}

impl GitCli {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn from_config(cfg: &GhlinkConfig) -> Self {
        Self::new(cfg.git_program.clone(), cfg.command_timeout())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::from_config(&GhlinkConfig::default())
    }
}

impl GitRunner for GitCli {
    fn run(
        &self,
        cwd: &Path,
        args: &[&str],
    ) -> impl Future<Output = Result<String, GitError>> + Send {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let program = self.program.clone();
        let timeout = self.timeout;
        let args = args.join(" ");
        tracing::debug!(cwd = %cwd.display(), "running {} {}", program, args);

        async move {
            let output = match tokio::time::timeout(timeout, command.output()).await {
                Ok(result) => result.map_err(|source| GitError::Spawn { program, source })?,
                Err(_) => return Err(GitError::TimedOut { args, timeout }),
            };

            if !output.status.success() {
                return Err(GitError::Failed {
                    args,
                    code: output.status.code(),
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                });
            }

            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        }
    }
}
