//! Error types for print-file metadata extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by individual file parses.
///
/// These never reach the public API: `extract_print_info` logs them and moves
/// on to the next file, returning whatever fields were recovered.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Corrupt 3MF archive {path}: {source}")]
    CorruptArchive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
