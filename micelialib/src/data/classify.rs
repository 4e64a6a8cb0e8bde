//! Per-line classification.
//!
//! Every line is exactly one of three kinds:
//!
//! - **Blank**: empty or whitespace-only
//! - **Comment**: starts, at column 0, with one of [`COMMENT_PREFIXES`]
//! - **Code**: anything else
//!
//! This is a prefix heuristic, not a tokenizer. Block comments are not
//! tracked, an indented `// note` is code, and so is `x = 1; // note`.

use serde::{Deserialize, Serialize};

/// Tokens that mark a line as a comment when they open the line.
pub const COMMENT_PREFIXES: &[&str] = &["//", "#", ";;"];

/// The kind of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineClass {
    Blank,
    Comment,
    Code,
}

/// Classify one line of text.
///
/// A trailing `\n` or `\r\n` is ignored.
///
/// ```rust
/// use micelialib::{classify, LineClass};
///
/// assert_eq!(classify("   \t\n"), LineClass::Blank);
/// assert_eq!(classify("// note\n"), LineClass::Comment);
/// assert_eq!(classify("    // note\n"), LineClass::Code);
/// ```
pub fn classify(line: &str) -> LineClass {
    let line = strip_terminator(line);

    // Blank wins over any prefix check
    if line.chars().all(char::is_whitespace) {
        return LineClass::Blank;
    }

    if COMMENT_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
        LineClass::Comment
    } else {
        LineClass::Code
    }
}

/// Classify a raw line, decoding invalid UTF-8 lossily.
pub fn classify_bytes(line: &[u8]) -> LineClass {
    classify(&String::from_utf8_lossy(line))
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
