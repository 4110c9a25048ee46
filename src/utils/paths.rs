//! Path helpers

use std::ffi::OsStr;

/// True when a file or directory name starts with a dot.
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
