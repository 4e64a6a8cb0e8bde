//! Output formatting: present counts as an aligned table.
//!
//! This module handles the last stage of the pipeline - turning a
//! `CountResult` into text. It provides:
//!
//! - **ReportTable**: headers, one row per file, and a total footer
//! - **TableRow**: a label with formatted values
//!
//! ## Example
//!
//! ```rust,no_run
//! use micelialib::output::ReportTable;
//! use micelialib::{count_path, Columns, CountOptions};
//!
//! let result = count_path(".", &CountOptions::new())?;
//! print!("{}", ReportTable::from_result(&result, Columns::all()));
//! # Ok::<(), micelialib::MiceliaError>(())
//! ```

pub mod table;

pub use table::{ReportTable, TableRow, NUMBER_WIDTH, PATH_PADDING, SEPARATOR};
