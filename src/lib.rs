//! tokensub: recursive `__KEY__` token substitution
//!
//! Loads a flat `KEY=value` file and rewrites every UTF-8 text file under a
//! directory tree in place, replacing each `__KEY__` token with its value.

pub mod config;
pub mod domain;
pub mod render;
pub mod rewrite;
pub mod scan;
pub mod utils;

pub use config::{load_replacements, parse_replacements, ConfigError};
pub use domain::{FileOutcome, ReplacementMap, RunSummary, SkipReason};
pub use rewrite::TreeRewriter;
