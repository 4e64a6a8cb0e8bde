//! Source discovery: find files to count.
//!
//! This module handles the first stage of the pipeline - deciding which
//! files get counted. It provides:
//!
//! - **Ignore set**: base names pruned from the walk (`.git`, `node_modules`, ...)
//! - **Walker**: depth-first traversal yielding paths relative to the root
//!
//! ## Example
//!
//! ```rust,no_run
//! use micelialib::source::{walk, IgnoreSet, WalkOptions};
//!
//! let ignore = IgnoreSet::new().with_name("target");
//! let files = walk(".", &ignore, &WalkOptions::new())?;
//! # Ok::<(), micelialib::MiceliaError>(())
//! ```

pub mod ignore;
pub mod walker;

pub use ignore::{IgnoreSet, DEFAULT_IGNORES};
pub use walker::{walk, WalkOptions};
