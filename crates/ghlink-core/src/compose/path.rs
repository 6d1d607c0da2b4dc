//! Repository-relative path handling for blob URLs.

use std::path::Path;

/// Rewrites every `\` separator to `/` so the path can be embedded in a URL.
pub fn normalize_relative_path(relative_path: &str) -> String {
    relative_path.replace('\\', "/")
}

/// Lossy string form of a relative path with forward-slash separators.
///
/// Non-UTF-8 components are replaced rather than rejected; the URL is only a
/// hint for a browser.
pub fn relative_path_string(relative_path: &Path) -> String {
    normalize_relative_path(&relative_path.to_string_lossy())
}
