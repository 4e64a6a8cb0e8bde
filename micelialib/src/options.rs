//! Input options for counting and reporting.
//!
//! This module contains the configuration types that control what the
//! library does when it meets an unreadable file and which columns the
//! report shows.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MiceliaError;

/// What to do when a discovered file cannot be opened or read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReadErrorPolicy {
    /// Abort the whole run with the read error
    #[default]
    Abort,
    /// Log a warning, leave the file out of rows and totals, and carry on
    Skip,
}

/// Which numeric columns the report shows.
///
/// Counting always classifies every line; this only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Columns {
    /// Show code lines
    pub code: bool,
    /// Show comment lines
    pub comments: bool,
    /// Show blank lines
    pub blanks: bool,
}

impl Default for Columns {
    fn default() -> Self {
        Self::all()
    }
}

impl Columns {
    /// No columns enabled (for building up).
    pub fn none() -> Self {
        Self {
            code: false,
            comments: false,
            blanks: false,
        }
    }

    /// Code, comment and blank columns.
    pub fn all() -> Self {
        Self {
            code: true,
            comments: true,
            blanks: true,
        }
    }

    /// Builder: enable code
    pub fn with_code(mut self) -> Self {
        self.code = true;
        self
    }

    /// Builder: enable comments
    pub fn with_comments(mut self) -> Self {
        self.comments = true;
        self
    }

    /// Builder: enable blanks
    pub fn with_blanks(mut self) -> Self {
        self.blanks = true;
        self
    }

    /// Build from column names such as `["code", "blank"]`.
    ///
    /// An empty list means all columns.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, MiceliaError> {
        if names.is_empty() {
            return Ok(Self::all());
        }

        let mut columns = Self::none();
        for name in names {
            columns = match name.as_ref().parse::<Column>()? {
                Column::Code => columns.with_code(),
                Column::Comments => columns.with_comments(),
                Column::Blanks => columns.with_blanks(),
            };
        }
        Ok(columns)
    }

    /// Enabled columns in display order.
    pub fn enabled(&self) -> Vec<Column> {
        let mut out = Vec::new();
        if self.code {
            out.push(Column::Code);
        }
        if self.comments {
            out.push(Column::Comments);
        }
        if self.blanks {
            out.push(Column::Blanks);
        }
        out
    }
}

/// A single numeric report column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    Code,
    Comments,
    Blanks,
}

impl Column {
    /// Header text for this column.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Code => "code",
            Column::Comments => "comment",
            Column::Blanks => "blank",
        }
    }
}

impl FromStr for Column {
    type Err = MiceliaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "code" => Ok(Column::Code),
            "comment" | "comments" => Ok(Column::Comments),
            "blank" | "blanks" => Ok(Column::Blanks),
            _ => Err(MiceliaError::UnknownColumn(s.to_string())),
        }
    }
}
