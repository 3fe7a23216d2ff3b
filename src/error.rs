//! Error types for syskit.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for syskit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in syskit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file or stream operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The user home directory could not be resolved.
    #[error("User home directory could not be resolved")]
    HomeNotFound,

    /// Private directory could not be created, or a non-directory occupies
    /// the target path.
    #[error("Private directory unavailable: {0}")]
    DirUnavailable(PathBuf),

    /// Block size must be at least one byte.
    #[error("Invalid block size: {0} (must be at least 1)")]
    InvalidBlockSize(usize),

    /// Stream contents were not valid UTF-8.
    #[error("Invalid UTF-8 in stream contents: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
