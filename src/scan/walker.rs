//! Directory traversal with pre-descent pruning

use crate::domain::EXCLUDED_DIR_NAMES;
use crate::utils::is_hidden_name;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Walks a tree and yields the files eligible for substitution.
///
/// Dot-prefixed directories and the names in [`EXCLUDED_DIR_NAMES`] are pruned
/// before descent, so nothing below them is ever visited. Dot-prefixed files are
/// skipped. The root itself is never pruned.
pub struct TreeWalker {
    root: PathBuf,
    follow_symlinks: bool,
}

impl TreeWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), follow_symlinks: false }
    }

    /// Set whether to descend into symlinked directories
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Iterate eligible file paths in file-name order, depth first.
    pub fn files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        WalkDir::new(&self.root)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_pruned_dir(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!("Skipping unreadable path: {}", err);
                    None
                }
            })
            .filter(is_candidate_file)
            .map(DirEntry::into_path)
    }
}

fn is_pruned_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name();
    is_hidden_name(name) || EXCLUDED_DIR_NAMES.iter().any(|d| name == *d)
}

fn is_candidate_file(entry: &DirEntry) -> bool {
    if is_hidden_name(entry.file_name()) {
        return false;
    }
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    // Unfollowed symlinks are files unless they point at a directory; dangling
    // links are kept so the read failure is reported.
    !(file_type.is_symlink() && entry.path().is_dir())
}
