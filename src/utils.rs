// src/utils.rs
use std::path::{Path, PathBuf};

/// True for dotfiles and dot-directories, which the walker never descends
/// into.
#[must_use]
pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    // The walk root is always admitted, even when it is "." or a dotdir.
    if entry.depth() == 0 {
        return false;
    }
    entry.file_name().to_str().is_some_and(|s| {
        // Temp directories (tempfile's .tmpXXXX) must stay walkable.
        if s.starts_with(".tmp") {
            return false;
        }
        s.starts_with('.')
    })
}

/// Splits a path into its directory part relative to `root` plus the bare
/// filename. Returns `None` when `path` is not under `root` or has no
/// filename component.
#[must_use]
pub fn split_relative(root: &Path, path: &Path) -> Option<(PathBuf, String)> {
    let relative = path.strip_prefix(root).ok()?;
    let filename = relative.file_name()?.to_str()?.to_string();
    let directory = relative.parent().map_or_else(PathBuf::new, Path::to_path_buf);
    Some((directory, filename))
}
