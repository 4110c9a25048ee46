//! Output rendering

pub mod report;

pub use report::{write_modified_line, write_replacements, write_summary};
