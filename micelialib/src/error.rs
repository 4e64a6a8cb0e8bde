//! Error types for micelialib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while walking a tree or counting lines
#[derive(Error, Debug)]
pub enum MiceliaError {
    /// Failed to open or read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The root exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The root directory could not be opened
    #[error("cannot walk '{path}': {source}")]
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Unknown report column name
    #[error("unknown column '{0}' (expected code, comment or blank)")]
    UnknownColumn(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MiceliaError {
    /// Whether the error means the root could not be walked as a directory.
    ///
    /// Callers use this to fall back to counting the root as a single file.
    pub fn is_traversal(&self) -> bool {
        matches!(
            self,
            MiceliaError::NotADirectory(_) | MiceliaError::Traversal { .. }
        )
    }
}
