//! Orchestration: file path → repository root → remote + branch → blob URL.
//!
//! Linear and non-retrying. Every expected failure (no repository, git error,
//! non-GitHub remote) ends in [`Resolution::NotResolvable`]; only unexpected
//! failures such as a file outside its repository root surface as `Err`.

mod outcome;
mod relative;

pub use outcome::{NotResolvable, Resolution};
pub use relative::{absolutize, relative_to_root};

use anyhow::Result;
use std::path::Path;

use crate::compose::{blob_url, relative_path_string, RemoteKind};
use crate::git::{GitRunner, RemoteResolver};

#[derive(Debug, Clone)]
pub struct Locator<R> {
    resolver: RemoteResolver<R>,
}

impl<R: GitRunner> Locator<R> {
    pub fn new(runner: R) -> Self {
        Self {
            resolver: RemoteResolver::new(runner),
        }
    }

    pub fn resolver(&self) -> &RemoteResolver<R> {
        &self.resolver
    }

    /// Caller-facing shortcut: the URL, or `None` when no URL is available.
    pub async fn resolve(&self, file_path: &Path) -> Result<Option<String>> {
        Ok(self.locate(file_path).await?.into_url())
    }

    /// Full pipeline, looking up the repository root with git.
    pub async fn locate(&self, file_path: &Path) -> Result<Resolution> {
        let file_path = absolutize(file_path)?;
        let root = match self.resolver.repository_root(&file_path).await {
            Ok(root) => root,
            Err(source) => {
                return Ok(Resolution::not_resolvable(NotResolvable::NoRepository {
                    path: file_path,
                    source,
                }))
            }
        };
        self.locate_in(&root, &file_path).await
    }

    /// Pipeline with a caller-supplied repository root.
    pub async fn locate_in(&self, root: &Path, file_path: &Path) -> Result<Resolution> {
        let root = absolutize(root)?;
        let file_path = absolutize(file_path)?;

        let state = match self.resolver.repo_state(&root).await {
            Ok(state) => state,
            Err(e) => return Ok(Resolution::not_resolvable(NotResolvable::Git(e))),
        };

        let Some(origin) = RemoteKind::classify(&state.remote_url).web_origin() else {
            return Ok(Resolution::not_resolvable(
                NotResolvable::UnsupportedRemote {
                    remote_url: state.remote_url,
                },
            ));
        };

        let relative = relative_path_string(&relative_to_root(&root, &file_path)?);
        let url = blob_url(&origin, &state.branch, &relative);
        tracing::debug!(root = %root.display(), branch = %state.branch, "resolved {}", url);
        Ok(Resolution::Found(url))
    }
}
