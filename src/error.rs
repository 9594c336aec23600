//! Error type shared by the collector, formatter and printer.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a tree render.
///
/// None of these are retried; the first one aborts the whole run.
#[derive(Debug, Error)]
pub enum TreeError {
    /// An empty path string reached the traversal.
    #[error("path is empty")]
    EmptyPath,

    /// The path is neither a regular file nor a directory (or does not exist).
    #[error("{}: not a file or directory", .0.display())]
    InvalidPath(PathBuf),

    /// An ancestor depth was read before it was ever set.
    #[error("level {depth} doesn't exist")]
    MissingLevel { depth: usize },

    /// Listing a directory or writing its line failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// walkdir could not read a directory entry.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl TreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeError::Io {
            path: path.into(),
            source,
        }
    }
}
