//! URL composition: remote URL + branch + repository-relative path → GitHub blob URL.
//!
//! Everything here is pure string work. Branch names and paths are embedded
//! verbatim; nothing is percent-encoded.

mod origin;
mod path;

pub use origin::RemoteKind;
pub use path::{normalize_relative_path, relative_path_string};

/// Builds `{origin}/blob/{branch}/{relative_path}` for a GitHub-shaped remote.
///
/// Returns `None` when the remote is not a recognized GitHub URL; no partial
/// URL is ever produced in that case.
///
/// # Examples
///
/// - `compose_file_url("https://github.com/acme/widgets.git", "main", "src/index.ts")`
///   → `"https://github.com/acme/widgets/blob/main/src/index.ts"`
/// - `compose_file_url("https://gitlab.com/acme/widgets.git", "main", "x")` → `None`
pub fn compose_file_url(remote_url: &str, branch: &str, relative_path: &str) -> Option<String> {
    let origin = RemoteKind::classify(remote_url).web_origin()?;
    Some(blob_url(&origin, branch, relative_path))
}

/// Joins an already-normalized web origin with the blob route.
pub fn blob_url(web_origin: &str, branch: &str, relative_path: &str) -> String {
    format!(
        "{}/blob/{}/{}",
        web_origin,
        branch,
        normalize_relative_path(relative_path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_remote_with_git_suffix() {
        assert_eq!(
            compose_file_url("https://github.com/acme/widgets.git", "main", "src/index.ts")
                .as_deref(),
            Some("https://github.com/acme/widgets/blob/main/src/index.ts")
        );
    }

    #[test]
    fn ssh_remote_with_slashed_branch() {
        assert_eq!(
            compose_file_url("git@github.com:acme/widgets.git", "feature/x", "README.md")
                .as_deref(),
            Some("https://github.com/acme/widgets/blob/feature/x/README.md")
        );
    }

    #[test]
    fn ssh_remote_without_suffix_and_backslash_path() {
        assert_eq!(
            compose_file_url("git@github.com:acme/widgets", "main", "a\\b\\c.txt").as_deref(),
            Some("https://github.com/acme/widgets/blob/main/a/b/c.txt")
        );
    }

    #[test]
    fn unsupported_remote_yields_nothing() {
        assert_eq!(
            compose_file_url("https://gitlab.com/acme/widgets.git", "main", "src/lib.rs"),
            None
        );
        assert_eq!(compose_file_url("", "main", "src/lib.rs"), None);
    }

    #[test]
    fn detached_head_passes_through() {
        assert_eq!(
            compose_file_url("https://github.com/acme/widgets", "HEAD", "Cargo.toml").as_deref(),
            Some("https://github.com/acme/widgets/blob/HEAD/Cargo.toml")
        );
    }

    #[test]
    fn special_characters_are_not_encoded() {
        assert_eq!(
            compose_file_url(
                "https://github.com/acme/widgets.git",
                "fix#12",
                "docs/release notes 100%.md"
            )
            .as_deref(),
            Some("https://github.com/acme/widgets/blob/fix#12/docs/release notes 100%.md")
        );
    }

    #[test]
    fn empty_relative_path_keeps_trailing_slash() {
        assert_eq!(
            blob_url("https://github.com/acme/widgets", "main", ""),
            "https://github.com/acme/widgets/blob/main/"
        );
    }
}
