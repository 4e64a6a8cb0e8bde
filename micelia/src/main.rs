//! # micelia
//!
//! A CLI tool that counts code, comment and blank lines under a directory.
//!
//! ## Overview
//!
//! micelia is built on top of micelialib. It walks the given path, skips
//! ignored names (`.git`, `.idea`, `.vscode`, `node_modules` and anything
//! passed with `--ignore`), classifies every line of every file and prints
//! one row per file followed by a total row.
//!
//! ## Usage
//!
//! ```bash
//! # Count a directory
//! micelia src/
//!
//! # Skip extra names
//! micelia . --ignore target --ignore dist
//!
//! # Only code and blank columns
//! micelia . --type code,blank
//!
//! # Machine-readable output
//! micelia . --output json
//!
//! # A single file works too
//! micelia src/main.c
//! ```
//!
//! Logs go to stderr. `-v` raises the level (info, debug, trace); `RUST_LOG`
//! overrides it entirely.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use micelialib::{count_path, Columns, CountOptions, IgnoreSet, ReadErrorPolicy, WalkOptions};
use tracing_subscriber::EnvFilter;

use render::OutputFormat;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("micelia")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count code, comment and blank lines in a directory tree")
        .arg(
            Arg::new("path")
                .help("Directory (or single file) to count")
                .required(true),
        )
        .arg(
            Arg::new("ignore")
                .short('i')
                .long("ignore")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("Ignore files and directories with this name (can be specified multiple times)"),
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .value_delimiter(',')
                .value_parser(["code", "comment", "blank"])
                .help("Columns to show (comma-separated: code,comment,blank)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("skip-unreadable")
                .long("skip-unreadable")
                .action(ArgAction::SetTrue)
                .help("Warn and continue when a file cannot be read instead of aborting"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .action(ArgAction::SetTrue)
                .help("Sort directory entries by name"),
        )
        .arg(
            Arg::new("parallel")
                .short('j')
                .long("parallel")
                .action(ArgAction::SetTrue)
                .help("Count files in parallel"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
}

/// Drop one trailing path separator, keeping a bare root such as `/`.
fn normalize_root(path: &str) -> PathBuf {
    if path.len() > 1 {
        if let Some(stripped) = path.strip_suffix(std::path::is_separator) {
            return PathBuf::from(stripped);
        }
    }
    PathBuf::from(path)
}

/// Build the ignore set from the built-in names plus `--ignore`
fn build_ignore(matches: &ArgMatches) -> IgnoreSet {
    let names = matches
        .get_many::<String>("ignore")
        .map(|v| v.cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    IgnoreSet::new().extend(names)
}

/// Extract columns from matches
fn extract_columns(matches: &ArgMatches) -> Result<Columns, anyhow::Error> {
    let names: Vec<&str> = matches
        .get_many::<String>("type")
        .map(|v| v.map(|s| s.as_str()).collect())
        .unwrap_or_default();
    Ok(Columns::from_names(&names)?)
}

/// Build count options from matches
fn build_options(matches: &ArgMatches) -> CountOptions {
    let policy = if matches.get_flag("skip-unreadable") {
        ReadErrorPolicy::Skip
    } else {
        ReadErrorPolicy::Abort
    };

    CountOptions::new()
        .ignore(build_ignore(matches))
        .walk(WalkOptions::new().sorted(matches.get_flag("sort")))
        .on_read_error(policy)
        .parallel(matches.get_flag("parallel"))
}

/// Install the stderr logger. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Count and render; returns the full report text
fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let path = matches
        .get_one::<String>("path")
        .context("no path provided")?;
    let root = normalize_root(path);
    let columns = extract_columns(matches)?;
    let format = matches
        .get_one::<String>("output")
        .map(|s| OutputFormat::from_name(s))
        .unwrap_or(OutputFormat::Table);
    let options = build_options(matches);

    tracing::debug!(ignore = ?options.ignore.names(), root = %root.display(), "starting");

    let result = count_path(&root, &options)?;
    render::render(&result, columns, format)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["micelia"];
        argv.extend(args);
        build_command().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_root("src/"), PathBuf::from("src"));
        assert_eq!(normalize_root("src"), PathBuf::from("src"));
        assert_eq!(normalize_root("/"), PathBuf::from("/"));
        assert_eq!(normalize_root("a/b/"), PathBuf::from("a/b"));
    }

    #[test]
    fn test_path_is_required() {
        let err = build_command()
            .try_get_matches_from(["micelia"])
            .unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert!(build_command()
            .try_get_matches_from(["micelia", ".", "--bogus"])
            .is_err());
    }

    #[test]
    fn test_ignore_names_added_to_defaults() {
        let matches = parse(&[".", "-i", "target", "--ignore", ".git"]);
        let ignore = build_ignore(&matches);
        assert!(ignore.should_ignore("target"));
        assert!(ignore.should_ignore(".git"));
        assert!(ignore.should_ignore("node_modules"));
        assert_eq!(ignore.len(), micelialib::DEFAULT_IGNORES.len() + 1);
    }

    #[test]
    fn test_extract_columns() {
        let matches = parse(&[".", "--type", "code,blank"]);
        let columns = extract_columns(&matches).unwrap();
        assert!(columns.code);
        assert!(!columns.comments);
        assert!(columns.blanks);

        let matches = parse(&["."]);
        assert_eq!(extract_columns(&matches).unwrap(), Columns::all());
    }

    #[test]
    fn test_build_options() {
        let matches = parse(&[".", "--skip-unreadable", "--sort", "-j"]);
        let options = build_options(&matches);
        assert_eq!(options.on_read_error, ReadErrorPolicy::Skip);
        assert!(options.walk.sorted);
        assert!(options.parallel);

        let options = build_options(&parse(&["."]));
        assert_eq!(options.on_read_error, ReadErrorPolicy::Abort);
        assert!(!options.walk.sorted);
        assert!(!options.parallel);
    }
}
