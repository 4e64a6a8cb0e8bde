//! Name-based ignore set.
//!
//! Entries are matched by base name only, exactly and case-sensitively.
//! There is no glob or partial matching: `node_modules` ignores every
//! entry called `node_modules`, at any depth, and nothing else.

use std::collections::HashSet;

/// Names ignored by default: VCS metadata, editor config, dependency folders.
pub const DEFAULT_IGNORES: &[&str] = &[".git", ".idea", ".vscode", "node_modules"];

/// A set of file or directory base names to skip during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::empty().extend(DEFAULT_IGNORES.iter().copied())
    }
}

impl IgnoreSet {
    /// Create a set holding the built-in names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set with no names at all, not even the built-in ones.
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Add a name. Adding a name twice has no further effect.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Add several names.
    pub fn extend<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Check whether an entry with this base name should be skipped.
    pub fn should_ignore(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Member names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
