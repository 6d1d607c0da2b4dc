use anyhow::{anyhow, Context, Result};
use std::path::{Component, Path, PathBuf};

/// Joins a relative path onto the current directory; absolute paths pass through.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("determine current directory")?;
    Ok(cwd.join(path))
}

/// Path of `file` relative to `root`.
///
/// Tries a lexical prefix strip first. git reports the root with symlinks
/// resolved, so on a miss both sides are canonicalized and the strip retried.
pub fn relative_to_root(root: &Path, file: &Path) -> Result<PathBuf> {
    if let Ok(rel) = file.strip_prefix(root) {
        if !rel.components().any(|c| matches!(c, Component::ParentDir)) {
            return Ok(rel.to_path_buf());
        }
    }

    let canonical_root = root
        .canonicalize()
        .with_context(|| format!("canonicalize repository root {}", root.display()))?;
    let canonical_file = file
        .canonicalize()
        .with_context(|| format!("canonicalize {}", file.display()))?;

    canonical_file
        .strip_prefix(&canonical_root)
        .map(Path::to_path_buf)
        .map_err(|_| {
            anyhow!(
                "{} is not inside repository root {}",
                file.display(),
                root.display()
            )
        })
}
