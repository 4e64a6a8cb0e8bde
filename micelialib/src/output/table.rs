//! Table-ready data structures for the line report.
//!
//! The data flow is:
//! 1. Raw data (`CountResult`)
//! 2. `ReportTable` (labels and formatted cells, widths fixed)
//! 3. Rendered text (`ReportTable::render`)
//!
//! Widths are derived from every row before any line is produced, so the
//! header, the file rows and the total row share column boundaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::counter::CountResult;
use crate::data::stats::Tally;
use crate::options::{Column, Columns};

/// Extra spaces after the longest label in the path column.
pub const PATH_PADDING: usize = 4;

/// Width of every numeric column.
pub const NUMBER_WIDTH: usize = 9;

/// Cell separator.
pub const SEPARATOR: &str = " | ";

/// Header of the path column.
pub const FILE_HEADER: &str = "file";

/// Label of the footer row.
pub const TOTAL_LABEL: &str = "total";

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (file path or "total")
    pub label: String,
    /// Values for each numeric column, ready for display
    pub values: Vec<String>,
}

/// Table-ready report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Column headers: ["file", "code", "comment", "blank"] or a subset
    pub headers: Vec<String>,
    /// One row per counted file, in pipeline order
    pub rows: Vec<TableRow>,
    /// The total row
    pub footer: TableRow,
    /// Width of the path column, padding included
    pub label_width: usize,
}

impl ReportTable {
    /// Build a table from a count result.
    pub fn from_result(result: &CountResult, columns: Columns) -> Self {
        let enabled = columns.enabled();

        let rows: Vec<TableRow> = result
            .files
            .iter()
            .map(|file| TableRow {
                label: file.path.display().to_string(),
                values: format_tally(&file.stats, &enabled),
            })
            .collect();

        let footer = TableRow {
            label: TOTAL_LABEL.to_string(),
            values: format_tally(&result.total, &enabled),
        };

        let mut headers = vec![FILE_HEADER.to_string()];
        headers.extend(enabled.iter().map(|c| c.header().to_string()));

        let label_width = label_width(&rows);

        ReportTable {
            headers,
            rows,
            footer,
            label_width,
        }
    }

    /// Render the whole table. Every line ends with a newline.
    pub fn render(&self) -> String {
        let mut out = self.header_line();
        out.push('\n');

        for row in self.rows.iter().chain([&self.footer]) {
            out.push_str(&self.format_line(&row.label, &row.values));
            out.push('\n');
        }

        out
    }

    /// Render the header line alone, without the trailing newline.
    pub fn header_line(&self) -> String {
        match self.headers.split_first() {
            Some((label, cells)) => self.format_line(label, cells),
            None => self.format_line(FILE_HEADER, &[]),
        }
    }

    fn format_line(&self, label: &str, cells: &[String]) -> String {
        let mut line = format!("{:<width$}", label, width = self.label_width);
        for cell in cells {
            line.push_str(SEPARATOR);
            line.push_str(&format!("{:>width$}", cell, width = NUMBER_WIDTH));
        }
        line
    }
}

impl fmt::Display for ReportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Path column width: longest label (header and footer included) plus padding.
fn label_width(rows: &[TableRow]) -> usize {
    rows.iter()
        .map(|r| r.label.chars().count())
        .chain([FILE_HEADER.len(), TOTAL_LABEL.len()])
        .max()
        .unwrap_or(0)
        + PATH_PADDING
}

fn format_tally(tally: &Tally, columns: &[Column]) -> Vec<String> {
    columns
        .iter()
        .map(|column| match column {
            Column::Code => tally.code,
            Column::Comments => tally.comments,
            Column::Blanks => tally.blanks,
        })
        .map(|n| n.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::FileTally;
    use std::path::PathBuf;

    fn tally(code: u64, comments: u64, blanks: u64) -> Tally {
        Tally {
            code,
            comments,
            blanks,
        }
    }

    fn sample_result() -> CountResult {
        let mut result = CountResult::new(PathBuf::from("project"));
        result.push(FileTally::new(PathBuf::from("a.txt"), tally(1, 1, 1)));
        result.push(FileTally::new(
            PathBuf::from("src/longer_name.c"),
            tally(120, 8, 30),
        ));
        result
    }

    /// Split a rendered line into trimmed cells.
    fn cells(line: &str) -> Vec<&str> {
        line.split(SEPARATOR).map(str::trim).collect()
    }

    #[test]
    fn test_headers_all_columns() {
        let table = ReportTable::from_result(&sample_result(), Columns::all());
        assert_eq!(table.headers, vec!["file", "code", "comment", "blank"]);
    }

    #[test]
    fn test_headers_subset() {
        let columns = Columns::none().with_code().with_blanks();
        let table = ReportTable::from_result(&sample_result(), columns);
        assert_eq!(table.headers, vec!["file", "code", "blank"]);
        assert_eq!(table.rows[1].values, vec!["120", "30"]);
    }

    #[test]
    fn test_scenario_row() {
        let mut result = CountResult::new(PathBuf::from("."));
        result.push(FileTally::new(PathBuf::from("a.txt"), tally(1, 1, 1)));

        let rendered = ReportTable::from_result(&result, Columns::all()).render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(cells(lines[0]), vec!["file", "code", "comment", "blank"]);
        assert_eq!(cells(lines[1]), vec!["a.txt", "1", "1", "1"]);
        assert_eq!(cells(lines[2]), vec!["total", "1", "1", "1"]);
        assert_eq!(
            lines[1],
            format!(
                "a.txt    {sep}        1{sep}        1{sep}        1",
                sep = SEPARATOR
            )
        );
    }

    #[test]
    fn test_label_width_from_longest_path() {
        let table = ReportTable::from_result(&sample_result(), Columns::all());
        assert_eq!(table.label_width, "src/longer_name.c".len() + PATH_PADDING);
    }

    #[test]
    fn test_label_width_never_below_headers() {
        let mut result = CountResult::new(PathBuf::from("."));
        result.push(FileTally::new(PathBuf::from("a"), tally(0, 0, 0)));
        let table = ReportTable::from_result(&result, Columns::all());
        assert_eq!(table.label_width, TOTAL_LABEL.len() + PATH_PADDING);
    }

    #[test]
    fn test_all_lines_aligned() {
        let rendered = ReportTable::from_result(&sample_result(), Columns::all()).render();
        let lines: Vec<&str> = rendered.lines().collect();

        let width = lines[0].len();
        assert!(lines.iter().all(|l| l.len() == width));

        let first_sep = lines[0].find(SEPARATOR).unwrap();
        assert!(lines.iter().all(|l| l.find(SEPARATOR) == Some(first_sep)));
    }

    #[test]
    fn test_numbers_right_aligned() {
        let rendered = ReportTable::from_result(&sample_result(), Columns::all()).render();
        let row = rendered.lines().nth(2).unwrap();
        assert!(row.contains(&format!("{sep}      120{sep}", sep = SEPARATOR)));
    }

    #[test]
    fn test_footer_is_total() {
        let result = sample_result();
        let table = ReportTable::from_result(&result, Columns::all());
        assert_eq!(table.footer.label, "total");
        assert_eq!(table.footer.values, vec!["121", "9", "31"]);
    }

    #[test]
    fn test_empty_result_renders_header_and_total() {
        let result = CountResult::new(PathBuf::from("."));
        let table = ReportTable::from_result(&result, Columns::all());
        let rendered = table.to_string();

        assert!(table.rows.is_empty());
        assert_eq!(rendered.lines().count(), 2);
        assert_eq!(
            cells(rendered.lines().nth(1).unwrap()),
            vec!["total", "0", "0", "0"]
        );
    }

    #[test]
    fn test_header_line() {
        let table = ReportTable::from_result(&sample_result(), Columns::all());
        let header = table.header_line();
        assert!(!header.ends_with('\n'));
        assert_eq!(header, table.render().lines().next().unwrap());
    }
}
