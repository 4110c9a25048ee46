//! Per-file token substitution

use crate::domain::{FileOutcome, ReplacementMap, SkipReason};
use crate::utils::{read_text_strict, write_text, ReadTextError};
use std::path::Path;

/// Apply every replacement to `content`, one literal pass per token in map order.
///
/// Values that happen to contain a later token are substituted again when that
/// token's pass runs; earlier tokens are never re-scanned.
pub fn apply_replacements(content: &str, replacements: &ReplacementMap) -> String {
    let mut result = content.to_string();
    for (token, value) in replacements.iter() {
        if result.contains(token) {
            result = result.replace(token, value);
        }
    }
    result
}

/// Substitute tokens in a single file, writing it back only when it changed.
///
/// Nothing here is fatal: failures become [`FileOutcome::Skipped`].
pub fn rewrite_file(path: &Path, replacements: &ReplacementMap, dry_run: bool) -> FileOutcome {
    let original = match read_text_strict(path) {
        Ok(content) => content,
        Err(ReadTextError::NotText) => {
            tracing::debug!("Skipping non-text file {}", path.display());
            return FileOutcome::Skipped(SkipReason::NotText);
        }
        Err(ReadTextError::PermissionDenied) => {
            tracing::debug!("Skipping unreadable file {}", path.display());
            return FileOutcome::Skipped(SkipReason::PermissionDenied);
        }
        Err(ReadTextError::Io(err)) => {
            tracing::warn!("Could not read '{}': {}", path.display(), err);
            return FileOutcome::Skipped(SkipReason::ReadFailed);
        }
    };

    let updated = apply_replacements(&original, replacements);
    if updated == original {
        return FileOutcome::Unchanged;
    }
    if dry_run {
        return FileOutcome::Modified;
    }

    match write_text(path, &updated) {
        Ok(()) => FileOutcome::Modified,
        Err(err) => {
            tracing::warn!("Error writing to '{}': {}", path.display(), err);
            FileOutcome::Skipped(SkipReason::WriteFailed)
        }
    }
}
