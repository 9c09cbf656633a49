//! Error types for sls.
//!
//! Every failure carries a kind tag so callers can tell "skip this entry" apart from
//! "abort the run". The listing skips entries on any error, while the app driver aborts
//! only when the top-level target or the icon configuration fails.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [Error].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    Metadata,
    NameResolution,
    IconConfig,
    Io,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("failed to read metadata of {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to resolve {what} name for id {id} ({})", path.display())]
    NameResolution {
        path: PathBuf,
        what: &'static str,
        id: u32,
    },

    #[error("icon configuration {}: {reason}", path.display())]
    IconConfig { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Classifies an io error that happened while touching `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Error::Metadata {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Error::Metadata { .. } => ErrorKind::Metadata,
            Error::NameResolution { .. } => ErrorKind::NameResolution,
            Error::IconConfig { .. } => ErrorKind::IconConfig,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// True for failures that end the run when they hit the top-level target.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NotFound | ErrorKind::PermissionDenied | ErrorKind::IconConfig
        )
    }
}
