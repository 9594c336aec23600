//! Directory listing, filtering, sorting, and per-depth sibling state.

mod levels;
pub(crate) mod walk;

use std::path::PathBuf;

pub use crate::error::TreeError;
pub use levels::{sibling_state, IterationState, LevelStates};
pub use walk::collect;

pub type Result<T> = std::result::Result<T, TreeError>;

/// What a listed child turned out to be after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Final path component, used for display and for the ignore check.
    pub name: String,
    /// Full filesystem path (the listed directory joined with `name`).
    pub path: PathBuf,
    pub kind: EntryKind,
}
