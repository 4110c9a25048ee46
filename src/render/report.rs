//! Plain-text run report.

use crate::domain::{ReplacementMap, RunSummary};
use std::io::{self, Write};
use std::path::Path;

/// List the loaded replacements followed by a blank line.
pub fn write_replacements<W: Write>(out: &mut W, replacements: &ReplacementMap) -> io::Result<()> {
    writeln!(out, "Loaded {} replacement(s):", replacements.len())?;
    for (token, value) in replacements.iter() {
        writeln!(out, "  {} -> {}", token, value)?;
    }
    writeln!(out)
}

/// Progress line for a file that was (or would be) modified.
pub fn write_modified_line<W: Write>(out: &mut W, path: &Path, dry_run: bool) -> io::Result<()> {
    let label = if dry_run { "Would modify" } else { "Modified" };
    writeln!(out, "{}: {}", label, path.display())
}

/// Blank line and the final counts.
pub fn write_summary<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    let verb = if summary.dry_run { "would modify" } else { "modified" };
    writeln!(out)?;
    writeln!(
        out,
        "Processed {} file(s), {} {} file(s)",
        summary.files_processed, verb, summary.files_modified
    )
}
