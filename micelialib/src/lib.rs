//! # micelialib
//!
//! A small lines-of-code counter library: walk a tree, classify each line
//! as code, comment or blank, and report per-file and total counts.
//!
//! ## Overview
//!
//! The pipeline has three stages:
//!
//! - **Source** ([`source`]): depth-first walk of the root, pruning entries
//!   whose base name is in the [`IgnoreSet`] (`.git`, `.idea`, `.vscode`,
//!   `node_modules` by default, plus any names you add)
//! - **Data** ([`data`]): each file is read line by line and every line is
//!   classified by a fixed-prefix heuristic
//! - **Output** ([`output`]): per-file tallies and the total become an
//!   aligned, pipe-delimited table
//!
//! ## Classification
//!
//! - **Blank**: empty or whitespace-only
//! - **Comment**: starts at column 0 with `//`, `#` or `;;`
//! - **Code**: everything else
//!
//! There is no language awareness: block comments are not tracked and an
//! indented `// note` counts as code.
//!
//! ## Example
//!
//! ```rust
//! use micelialib::{count_path, Columns, CountOptions, IgnoreSet, ReportTable};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.txt"), "hello\n\n// note\n").unwrap();
//!
//! let options = CountOptions::new().ignore(IgnoreSet::new().with_name("build"));
//! let result = count_path(dir.path(), &options).unwrap();
//! assert_eq!(result.total.code, 1);
//! assert_eq!(result.total.comments, 1);
//! assert_eq!(result.total.blanks, 1);
//!
//! let table = ReportTable::from_result(&result, Columns::all());
//! assert!(table.render().contains("a.txt"));
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod source;

pub use data::{
    classify, classify_bytes, count_file, count_path, count_reader, CountOptions, CountResult,
    FileTally, LineClass, Tally, COMMENT_PREFIXES,
};
pub use error::MiceliaError;
pub use options::{Column, Columns, ReadErrorPolicy};
pub use output::{ReportTable, TableRow};
pub use source::{walk, IgnoreSet, WalkOptions, DEFAULT_IGNORES};

/// Result type for micelialib operations
pub type Result<T> = std::result::Result<T, MiceliaError>;
