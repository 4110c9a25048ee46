//! Replacement config loading
//!
//! The config is a flat text file of `KEY=value` lines. Blank lines and `#`
//! comments are ignored; malformed lines are warned about and skipped.

use crate::domain::ReplacementMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load and parse the replacement config at `path`.
pub fn load_replacements(path: &Path) -> Result<ReplacementMap, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound { path: path.to_path_buf() },
        _ => ConfigError::Read { path: path.to_path_buf(), source },
    })?;

    let replacements = parse_replacements(&content);
    tracing::debug!("Loaded {} replacement(s) from {}", replacements.len(), path.display());
    Ok(replacements)
}

/// Parse config text into a replacement map.
pub fn parse_replacements(content: &str) -> ReplacementMap {
    let mut replacements = ReplacementMap::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            tracing::warn!("Skipping invalid line {}: {}", line_num, line);
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            tracing::warn!("Empty key on line {}", line_num);
            continue;
        }

        replacements.insert_key(key, value.trim());
    }

    replacements
}
