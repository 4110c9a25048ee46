//! Core data types shared across the loader, rewriter and renderer.

use std::collections::HashMap;

/// Directory names pruned during traversal, in addition to any dot-prefixed directory.
pub const EXCLUDED_DIR_NAMES: &[&str] = &["node_modules", "__pycache__", "dist", "build"];

/// Wrap a config key into the token searched for in file content.
pub fn wrap_token(key: &str) -> String {
    format!("__{key}__")
}

/// Ordered mapping from wrapped token (`__KEY__`) to its replacement value.
///
/// Insertion order is kept for reporting. Re-inserting an existing token
/// replaces its value but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under the token for `key`.
    pub(crate) fn insert_key(&mut self, key: &str, value: impl Into<String>) {
        let token = wrap_token(key);
        let value = value.into();
        match self.index.get(&token) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, value));
            }
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.index.get(token).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(token, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(token, value)| (token.as_str(), value.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ReplacementMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ReplacementMap::new();
        for (key, value) in iter {
            map.insert_key(key.as_ref(), value);
        }
        map
    }
}

/// Why a visited file was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Content is not valid UTF-8 (binary or foreign encoding)
    NotText,
    PermissionDenied,
    ReadFailed,
    WriteFailed,
}

/// Result of processing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Modified,
    Unchanged,
    Skipped(SkipReason),
}

/// Counters for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_modified: usize,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        self.files_processed += 1;
        if outcome == FileOutcome::Modified {
            self.files_modified += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_keeps_position_and_last_value() {
        let map: ReplacementMap = [("A", "1"), ("B", "2"), ("A", "3")].into_iter().collect();

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![("__A__", "3"), ("__B__", "2")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("__A__"), Some("3"));
        assert_eq!(map.get("A"), None);
    }

    #[test]
    fn test_summary_counts_every_outcome_as_processed() {
        let mut summary = RunSummary::default();
        summary.record(FileOutcome::Modified);
        summary.record(FileOutcome::Unchanged);
        summary.record(FileOutcome::Skipped(SkipReason::NotText));

        assert_eq!(summary.files_processed, 3);
        assert_eq!(summary.files_modified, 1);
    }
}
