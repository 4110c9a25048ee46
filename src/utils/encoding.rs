//! Strict UTF-8 file reading and writing.
//!
//! Files are decoded strictly: any invalid byte sequence means the file is
//! treated as non-text and left alone. A leading BOM is kept as content so it
//! is written back unchanged.

use encoding_rs::UTF_8;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadTextError {
    #[error("content is not valid UTF-8")]
    NotText,

    #[error("permission denied")]
    PermissionDenied,

    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for ReadTextError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ReadTextError::PermissionDenied,
            _ => ReadTextError::Io(err),
        }
    }
}

/// Decode bytes as UTF-8 without replacement characters.
pub fn decode_utf8_strict(bytes: &[u8]) -> Option<String> {
    UTF_8.decode_without_bom_handling_and_without_replacement(bytes).map(|cow| cow.into_owned())
}

/// Read a whole file as UTF-8 text.
pub fn read_text_strict(path: &Path) -> Result<String, ReadTextError> {
    let bytes = fs::read(path)?;
    decode_utf8_strict(&bytes).ok_or(ReadTextError::NotText)
}

/// Overwrite a file in place with UTF-8 text.
pub fn write_text(path: &Path, content: &str) -> io::Result<()> {
    let (bytes, _, _) = UTF_8.encode(content);
    fs::write(path, bytes)
}
