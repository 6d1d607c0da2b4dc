use std::path::PathBuf;
use thiserror::Error;

use crate::git::GitError;

/// Why no URL could be produced. Callers show one generic message for all of
/// these; the variant is kept for the log.
#[derive(Debug, Error)]
pub enum NotResolvable {
    #[error("no git repository owns {}", .path.display())]
    NoRepository {
        path: PathBuf,
        #[source]
        source: GitError,
    },
    #[error("could not read repository state: {0}")]
    Git(#[source] GitError),
    #[error("remote {remote_url:?} is not a GitHub URL")]
    UnsupportedRemote { remote_url: String },
}

/// Terminal state of one lookup.
#[derive(Debug)]
pub enum Resolution {
    Found(String),
    NotResolvable(NotResolvable),
}

impl Resolution {
    pub(crate) fn not_resolvable(reason: NotResolvable) -> Self {
        tracing::warn!("no URL available: {}", reason);
        Resolution::NotResolvable(reason)
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Resolution::Found(url) => Some(url),
            Resolution::NotResolvable(_) => None,
        }
    }

    pub fn into_url(self) -> Option<String> {
        match self {
            Resolution::Found(url) => Some(url),
            Resolution::NotResolvable(_) => None,
        }
    }
}
