//! Shared utilities

pub mod encoding;
pub mod paths;

pub use encoding::{read_text_strict, write_text, ReadTextError};
pub use paths::is_hidden_name;
