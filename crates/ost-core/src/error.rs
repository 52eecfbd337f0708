//! Error types for ost-core.
//!
//! Every failure during collection is fatal: there is no retry and no
//! partial-success reporting. Each variant carries the path it failed on so
//! the harness teardown can report something actionable.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectError>;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read event file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed event file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write host log {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("event file path has no file name: {0}")]
    NoFileName(PathBuf),

    #[error("host name {0:?} cannot be used as a log file name")]
    UnsafeHostName(String),

    #[error("collector {field} {value:?} must be a single directory name")]
    UnsafeLayout { field: &'static str, value: String },
}

impl CollectError {
    /// The file or directory the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::CreateDir { path, .. }
            | Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Write { path, .. }
            | Self::ReadDir { path, .. } => Some(path),
            Self::Copy { from, .. } => Some(from),
            Self::NoFileName(path) => Some(path),
            Self::UnsafeHostName(_) | Self::UnsafeLayout { .. } => None,
        }
    }
}
