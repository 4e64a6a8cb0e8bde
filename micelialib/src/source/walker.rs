//! Directory traversal.
//!
//! Walks a root directory depth-first and collects the regular files under
//! it, as paths relative to the root. Entries named in the [`IgnoreSet`] are
//! pruned together with their whole subtree. Symlinks and special files are
//! skipped and never followed.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::MiceliaError;
use crate::Result;

use super::ignore::IgnoreSet;

/// Traversal options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Sort entries by file name within each directory.
    ///
    /// When unset, entries come in the order the OS reports them.
    pub sorted: bool,
    /// Maximum depth to descend below the root (`None` = unlimited).
    pub max_depth: Option<usize>,
}

impl WalkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: sort entries by name.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Builder: limit descent depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

/// Collect every non-ignored regular file under `root`.
///
/// Returned paths are relative to `root` and in traversal order: a
/// directory's contents come right after the directory itself, before its
/// later siblings.
///
/// Fails with [`MiceliaError::NotADirectory`] or
/// [`MiceliaError::Traversal`] when `root` cannot be opened as a directory.
/// Unreadable entries below the root are logged and skipped.
pub fn walk(
    root: impl AsRef<Path>,
    ignore: &IgnoreSet,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    let mut walker = WalkDir::new(root).follow_links(false);
    if options.sorted {
        walker = walker.sort_by_file_name();
    }
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut files = Vec::new();

    for entry in walker.into_iter().filter_entry(|e| {
        // The root is never matched against the ignore set
        if e.depth() == 0 {
            return true;
        }
        let name = e.file_name().to_string_lossy();
        if ignore.should_ignore(&name) {
            debug!(path = %e.path().display(), "ignored");
            return false;
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if err.depth() == 0 => {
                return Err(MiceliaError::Traversal {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let file_type = entry.file_type();

        if entry.depth() == 0 {
            if !file_type.is_dir() {
                return Err(MiceliaError::NotADirectory(root.to_path_buf()));
            }
            continue;
        }

        if file_type.is_file() {
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap_or_else(|_| entry.path());
            files.push(relative.to_path_buf());
        } else if !file_type.is_dir() {
            debug!(path = %entry.path().display(), "skipping non-regular entry");
        }
    }

    Ok(files)
}
