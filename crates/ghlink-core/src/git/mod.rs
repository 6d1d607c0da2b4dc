//! Remote Resolver: reads the `origin` URL and current branch of a working tree.
//!
//! All git access goes through [`GitRunner`], so the orchestration can be driven
//! by a scripted runner in tests and by [`GitCli`] in production. Output is
//! treated as untrusted text: only the first non-empty trimmed line is used.

mod cli;
mod error;
#[cfg(test)]
pub(crate) mod scripted;

pub use cli::GitCli;
pub use error::GitError;

use std::future::Future;
use std::path::{Path, PathBuf};

pub const REMOTE_URL_ARGS: &[&str] = &["remote", "get-url", "origin"];
pub const CURRENT_BRANCH_ARGS: &[&str] = &["rev-parse", "--abbrev-ref", "HEAD"];
pub const SHOW_TOPLEVEL_ARGS: &[&str] = &["rev-parse", "--show-toplevel"];

/// Executes one git command in `cwd` and returns its raw standard output.
///
/// Implementations must report non-zero exit as [`GitError::Failed`].
pub trait GitRunner {
    fn run(
        &self,
        cwd: &Path,
        args: &[&str],
    ) -> impl Future<Output = Result<String, GitError>> + Send;
}

/// Remote URL and branch of a working tree, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoState {
    pub remote_url: String,
    pub branch: String,
}

#[derive(Debug, Clone)]
pub struct RemoteResolver<R> {
    runner: R,
}

impl<R: GitRunner> RemoteResolver<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// `git remote get-url origin` in `root`.
    pub async fn remote_url(&self, root: &Path) -> Result<String, GitError> {
        self.query(root, REMOTE_URL_ARGS).await
    }

    /// `git rev-parse --abbrev-ref HEAD` in `root`. `HEAD` (detached) is passed through.
    pub async fn current_branch(&self, root: &Path) -> Result<String, GitError> {
        self.query(root, CURRENT_BRANCH_ARGS).await
    }

    /// Both queries, issued concurrently. Either failing fails the whole.
    pub async fn repo_state(&self, root: &Path) -> Result<RepoState, GitError> {
        let (remote_url, branch) =
            tokio::try_join!(self.remote_url(root), self.current_branch(root))?;
        Ok(RepoState { remote_url, branch })
    }

    /// Top-level directory of the working tree containing `path`.
    ///
    /// Runs in `path` itself when it is a directory, otherwise in its parent.
    pub async fn repository_root(&self, path: &Path) -> Result<PathBuf, GitError> {
        let cwd = if path.is_dir() {
            path
        } else {
            match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            }
        };
        let root = self.query(cwd, SHOW_TOPLEVEL_ARGS).await?;
        Ok(PathBuf::from(root))
    }

    async fn query(&self, cwd: &Path, args: &[&str]) -> Result<String, GitError> {
        let stdout = self.runner.run(cwd, args).await?;
        first_non_empty_line(&stdout).ok_or_else(|| GitError::EmptyOutput {
            args: args.join(" "),
        })
    }
}

fn first_non_empty_line(value: &str) -> Option<String> {
    value
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.to_string())
}
