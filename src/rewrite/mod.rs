//! Tree-wide token substitution
//!
//! Walks the tree, rewrites each eligible file in turn and streams a line per
//! modified file to the given writer.

use crate::domain::{FileOutcome, ReplacementMap, RunSummary};
use crate::render::write_modified_line;
use crate::scan::TreeWalker;
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

pub mod substitute;

pub use substitute::{apply_replacements, rewrite_file};

/// Rewrites every eligible file under a root directory.
pub struct TreeRewriter {
    walker: TreeWalker,
    dry_run: bool,
}

impl TreeRewriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { walker: TreeWalker::new(root), dry_run: false }
    }

    /// Set whether to compute changes without writing them
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set whether to descend into symlinked directories
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.walker = self.walker.follow_symlinks(follow);
        self
    }

    /// Process the whole tree sequentially.
    ///
    /// Only errors writing to `out` abort the run; per-file problems are
    /// logged and counted as processed.
    pub fn run<W: Write>(&self, replacements: &ReplacementMap, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary { dry_run: self.dry_run, ..RunSummary::default() };

        for path in self.walker.files() {
            let outcome = rewrite_file(&path, replacements, self.dry_run);
            if outcome == FileOutcome::Modified {
                write_modified_line(out, &path, self.dry_run)?;
            }
            summary.record(outcome);
        }

        tracing::debug!(
            "Rewrite finished: {} processed, {} modified",
            summary.files_processed,
            summary.files_modified
        );
        Ok(summary)
    }
}
