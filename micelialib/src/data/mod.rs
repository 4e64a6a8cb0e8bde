//! Data collection: classify lines and collect statistics.
//!
//! This module handles the second stage of the pipeline - reading the
//! discovered files and tallying their lines. It provides:
//!
//! - **Classification**: blank / comment / code per line (`classify`)
//! - **Statistics**: `Tally` and `FileTally`
//! - **Counting**: `count_reader`, `count_file`, and the run driver `count_path`
//!
//! ## Example
//!
//! ```rust,no_run
//! use micelialib::data::{count_path, CountOptions};
//!
//! let result = count_path(".", &CountOptions::new())?;
//! println!("Total code lines: {}", result.total.code);
//! # Ok::<(), micelialib::MiceliaError>(())
//! ```

pub mod classify;
pub mod counter;
pub mod stats;

pub use classify::{classify, classify_bytes, LineClass, COMMENT_PREFIXES};
pub use counter::{count_file, count_path, count_reader, CountOptions, CountResult};
pub use stats::{FileTally, Tally};
