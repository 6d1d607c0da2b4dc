//! Classification of `origin` remote URLs into GitHub web origins.

const GITHUB_HTTPS_PREFIX: &str = "https://github.com/";
const GITHUB_SSH_PREFIX: &str = "git@github.com:";
const GIT_SUFFIX: &str = ".git";

/// Shape of a remote URL as reported by `git remote get-url`.
///
/// `path` is the `{owner}/{repo}` part with a single trailing `.git` removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteKind {
    /// `https://github.com/{owner}/{repo}(.git)?`
    Https { path: String },
    /// `git@github.com:{owner}/{repo}(.git)?`
    Ssh { path: String },
    /// Anything else: other hosts, other schemes, empty or malformed text.
    Unsupported,
}

impl RemoteKind {
    pub fn classify(remote_url: &str) -> Self {
        if let Some(rest) = remote_url.strip_prefix(GITHUB_HTTPS_PREFIX) {
            RemoteKind::Https {
                path: strip_git_suffix(rest).to_string(),
            }
        } else if let Some(rest) = remote_url.strip_prefix(GITHUB_SSH_PREFIX) {
            RemoteKind::Ssh {
                path: strip_git_suffix(rest).to_string(),
            }
        } else {
            RemoteKind::Unsupported
        }
    }

    /// `https://github.com/{owner}/{repo}`, or `None` for unsupported remotes.
    pub fn web_origin(&self) -> Option<String> {
        match self {
            RemoteKind::Https { path } | RemoteKind::Ssh { path } => {
                Some(format!("{GITHUB_HTTPS_PREFIX}{path}"))
            }
            RemoteKind::Unsupported => None,
        }
    }
}

fn strip_git_suffix(path: &str) -> &str {
    path.strip_suffix(GIT_SUFFIX).unwrap_or(path)
}
