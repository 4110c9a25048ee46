//! Replacement config loading
//!
//! Parses the flat `KEY=value` file into a [`ReplacementMap`](crate::domain::ReplacementMap).

pub mod loader;

pub use loader::{load_replacements, parse_replacements, ConfigError};
