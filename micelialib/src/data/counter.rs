//! High-level counting API.
//!
//! This module provides the entry points for counting lines: a single
//! reader or file, and a whole tree rooted at a path.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::MiceliaError;
use crate::options::ReadErrorPolicy;
use crate::source::{walk, IgnoreSet, WalkOptions};
use crate::Result;

use super::classify::classify_bytes;
use super::stats::{FileTally, Tally};

/// Options for a counting run.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Names pruned from the walk
    pub ignore: IgnoreSet,
    /// Traversal settings
    pub walk: WalkOptions,
    /// Behaviour on unreadable files
    pub on_read_error: ReadErrorPolicy,
    /// Count files on the rayon thread pool
    pub parallel: bool,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ignore set.
    pub fn ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    /// Set traversal options.
    pub fn walk(mut self, walk: WalkOptions) -> Self {
        self.walk = walk;
        self
    }

    /// Set the unreadable-file policy.
    pub fn on_read_error(mut self, policy: ReadErrorPolicy) -> Self {
        self.on_read_error = policy;
        self
    }

    /// Count files in parallel. Row order and totals are unaffected.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Result of counting a tree or a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountResult {
    /// Root path the run started from
    pub root: PathBuf,
    /// Whether the root was not a directory and was counted as one file
    pub single_file: bool,
    /// Per-file statistics, in walk order
    pub files: Vec<FileTally>,
    /// Sum of every entry in `files`
    pub total: Tally,
    /// Files left out under [`ReadErrorPolicy::Skip`]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<PathBuf>,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }

    /// Number of files counted.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Add a finished file tally and fold it into the total.
    pub fn push(&mut self, file: FileTally) {
        self.total += file.stats;
        self.files.push(file);
    }
}

/// Count lines from any buffered reader.
///
/// A line ends at `\n`; a final run of bytes without one still counts.
///
/// # Example
///
/// ```rust
/// use micelialib::count_reader;
///
/// let tally = count_reader("hello\n\n// note\n".as_bytes()).unwrap();
/// assert_eq!((tally.code, tally.comments, tally.blanks), (1, 1, 1));
/// ```
pub fn count_reader<R: BufRead>(mut reader: R) -> std::io::Result<Tally> {
    let mut tally = Tally::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        tally.record(classify_bytes(&line));
    }

    Ok(tally)
}

/// Count lines in a single file.
///
/// # Example
///
/// ```rust
/// use micelialib::count_file;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("a.txt");
/// fs::write(&path, "hello\n\n// note\n").unwrap();
///
/// let tally = count_file(&path).unwrap();
/// assert_eq!(tally.code, 1);
/// assert_eq!(tally.comments, 1);
/// assert_eq!(tally.blanks, 1);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<Tally> {
    let path = path.as_ref();
    let read_err = |source: std::io::Error| MiceliaError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let tally = count_reader(BufReader::new(file)).map_err(read_err)?;

    debug!(path = %path.display(), lines = tally.total(), "counted");
    Ok(tally)
}

/// Count every file under `root`.
///
/// If `root` cannot be walked as a directory it is counted as a single
/// file instead; the one row is labelled with `root` as given.
///
/// With [`ReadErrorPolicy::Abort`] the first unreadable file fails the
/// whole call and no partial result is returned.
///
/// # Example
///
/// ```rust
/// use micelialib::{count_path, CountOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.txt"), "hello\n\n// note\n").unwrap();
/// fs::create_dir(dir.path().join("node_modules")).unwrap();
/// fs::write(dir.path().join("node_modules/x.txt"), "x\n").unwrap();
///
/// let result = count_path(dir.path(), &CountOptions::new()).unwrap();
/// assert_eq!(result.file_count(), 1);
/// assert_eq!(result.total.total(), 3);
/// ```
pub fn count_path(root: impl AsRef<Path>, options: &CountOptions) -> Result<CountResult> {
    let root = root.as_ref();
    let mut result = CountResult::new(root.to_path_buf());

    let files = match walk(root, &options.ignore, &options.walk) {
        Ok(files) => files,
        Err(err) if err.is_traversal() => {
            debug!("{err}; counting root as a single file");
            let stats = count_file(root)?;
            result.single_file = true;
            result.push(FileTally::new(root.to_path_buf(), stats));
            return Ok(result);
        }
        Err(err) => return Err(err),
    };

    let counted: Vec<(PathBuf, Result<Tally>)> = if options.parallel {
        files
            .into_par_iter()
            .map(|rel| {
                let stats = count_file(root.join(&rel));
                (rel, stats)
            })
            .collect()
    } else {
        let mut counted = Vec::with_capacity(files.len());
        for rel in files {
            let stats = count_file(root.join(&rel));
            // Fail fast before opening anything else
            let abort = stats.is_err() && options.on_read_error == ReadErrorPolicy::Abort;
            counted.push((rel, stats));
            if abort {
                break;
            }
        }
        counted
    };

    for (rel, stats) in counted {
        match stats {
            Ok(stats) => result.push(FileTally::new(rel, stats)),
            Err(err) => match options.on_read_error {
                ReadErrorPolicy::Abort => return Err(err),
                ReadErrorPolicy::Skip => {
                    warn!("skipping: {err}");
                    result.skipped.push(rel);
                }
            },
        }
    }

    info!(
        files = result.file_count(),
        skipped = result.skipped.len(),
        lines = result.total.total(),
        "count finished"
    );

    Ok(result)
}
