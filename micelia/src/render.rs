//! Report rendering for CLI output

use console::Style;
use micelialib::{Columns, CountResult, ReportTable};

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Render a finished run in the requested format.
///
/// The whole report is built before anything is printed, so a failed run
/// never leaves a half-written table on stdout.
pub fn render(
    result: &CountResult,
    columns: Columns,
    format: OutputFormat,
) -> Result<String, anyhow::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(result, columns)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(result)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Aligned table; the header is bold when stdout supports it.
fn render_table(result: &CountResult, columns: Columns) -> String {
    let table = ReportTable::from_result(result, columns);
    let header = Style::new().bold().apply_to(table.header_line());

    let mut out = format!("{header}\n");
    for line in table.render().lines().skip(1) {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use micelialib::{FileTally, Tally};
    use std::path::PathBuf;

    fn sample_result() -> CountResult {
        let mut result = CountResult::new(PathBuf::from("project"));
        result.push(FileTally::new(
            PathBuf::from("a.txt"),
            Tally {
                code: 1,
                comments: 1,
                blanks: 1,
            },
        ));
        result
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("table"), OutputFormat::Table);
    }

    #[test]
    fn test_table_matches_library_rendering() {
        console::set_colors_enabled(false);
        let result = sample_result();
        let out = render(&result, Columns::all(), OutputFormat::Table).unwrap();
        assert_eq!(
            out,
            ReportTable::from_result(&result, Columns::all()).render()
        );
    }

    #[test]
    fn test_json_is_valid() {
        let out = render(&sample_result(), Columns::all(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["files"][0]["path"], "a.txt");
        assert_eq!(parsed["total"]["code"], 1);
        assert!(parsed.get("skipped").is_none());
    }
}
