//! Core data structures for line statistics.
//!
//! A [`Tally`] holds the three line counts (code, comments, blanks). A
//! [`FileTally`] pairs one with the path it was measured on. Run totals are
//! plain `Tally` values summed with `+=`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

use super::classify::LineClass;

/// Line counts for a file or a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Lines classified as code
    pub code: u64,
    /// Lines starting with a comment prefix
    pub comments: u64,
    /// Empty or whitespace-only lines
    pub blanks: u64,
}

impl Tally {
    /// Create a tally with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lines counted (code + comments + blanks).
    pub fn total(&self) -> u64 {
        self.code + self.comments + self.blanks
    }

    /// Count one line of the given class.
    pub fn record(&mut self, class: LineClass) {
        match class {
            LineClass::Code => self.code += 1,
            LineClass::Comment => self.comments += 1,
            LineClass::Blank => self.blanks += 1,
        }
    }

    /// Number of lines recorded with the given class.
    pub fn get(&self, class: LineClass) -> u64 {
        match class {
            LineClass::Code => self.code,
            LineClass::Comment => self.comments,
            LineClass::Blank => self.blanks,
        }
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            comments: self.comments + other.comments,
            blanks: self.blanks + other.blanks,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comments += other.comments;
        self.blanks += other.blanks;
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

/// Statistics for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTally {
    /// Display path (relative to the root, or the root itself for a single file).
    pub path: PathBuf,
    /// Line counts for this file.
    #[serde(flatten)]
    pub stats: Tally,
}

impl FileTally {
    pub fn new(path: PathBuf, stats: Tally) -> Self {
        Self { path, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_default() {
        let tally = Tally::new();
        assert_eq!(tally.code, 0);
        assert_eq!(tally.comments, 0);
        assert_eq!(tally.blanks, 0);
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_record_hits_exactly_one_bucket() {
        let mut tally = Tally::new();
        tally.record(LineClass::Code);
        tally.record(LineClass::Code);
        tally.record(LineClass::Comment);
        tally.record(LineClass::Blank);

        assert_eq!(tally.get(LineClass::Code), 2);
        assert_eq!(tally.get(LineClass::Comment), 1);
        assert_eq!(tally.get(LineClass::Blank), 1);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_tally_add() {
        let a = Tally {
            code: 10,
            comments: 3,
            blanks: 2,
        };
        let b = Tally {
            code: 5,
            comments: 1,
            blanks: 7,
        };

        let sum = a + b;
        assert_eq!(sum.code, 15);
        assert_eq!(sum.comments, 4);
        assert_eq!(sum.blanks, 9);
        assert_eq!(sum.total(), a.total() + b.total());

        let mut acc = Tally::new();
        acc += a;
        acc += b;
        assert_eq!(acc, sum);
    }

    #[test]
    fn test_tally_sum() {
        let tallies = [
            Tally {
                code: 1,
                comments: 1,
                blanks: 1,
            },
            Tally {
                code: 2,
                comments: 0,
                blanks: 4,
            },
        ];
        let total: Tally = tallies.into_iter().sum();
        assert_eq!(
            total,
            Tally {
                code: 3,
                comments: 1,
                blanks: 5
            }
        );
    }

    #[test]
    fn test_file_tally_serializes_flat() {
        let file = FileTally::new(
            PathBuf::from("a.txt"),
            Tally {
                code: 1,
                comments: 2,
                blanks: 3,
            },
        );
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["path"], "a.txt");
        assert_eq!(json["code"], 1);
        assert_eq!(json["comments"], 2);
        assert_eq!(json["blanks"], 3);
    }
}
