//! Error types for file resolution

use std::io::{self, ErrorKind};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for responder operations
pub type ResponderResult<T> = Result<T, ResponderError>;

/// Failures while loading a file for a request
#[derive(Debug, Error)]
pub enum ResponderError {
    /// Request path climbs above the document root
    #[error("Request path escapes the document root: {0}")]
    OutsideRoot(String),

    /// File does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other I/O failure
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ResponderError {
    /// Classify a read failure for `path`
    #[must_use]
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io { path, source }
        }
    }

    /// Whether the file simply does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// POSIX-style code reported in 500 bodies
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::OutsideRoot(_) | Self::NotFound(_) => "ENOENT",
            Self::Io { source, .. } => error_code(source),
        }
    }
}

/// Map an I/O error onto the errno-style name clients see
#[must_use]
pub fn error_code(err: &io::Error) -> &'static str {
    match err.kind() {
        ErrorKind::NotFound => "ENOENT",
        ErrorKind::PermissionDenied => "EACCES",
        ErrorKind::IsADirectory => "EISDIR",
        ErrorKind::NotADirectory => "ENOTDIR",
        _ => "EIO",
    }
}
