//! Data model shared by the navigator, selector and batch operator.
//!
//! # Public API
//! - [`DirectoryListing`]: Snapshot of the entry names of one directory
//! - [`EntryKind`]: Directory or file classification of an entry
//! - [`NavigateOutcome`]: Result of a successful navigation attempt
//! - [`BatchOperation`]: Copy, move or delete
//! - [`BatchReport`]: Summary of one batch run over the selection
//!
//! # Snapshot semantics
//! Indices are only meaningful against the listing instance that produced
//! them. A listing is never refreshed in place; re-listing a directory
//! always yields a new [`DirectoryListing`].

use crate::core::error::{FileNavigatorError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    directory: PathBuf,
    entries: Vec<String>,
}

impl DirectoryListing {
    pub fn new(directory: impl Into<PathBuf>, entries: Vec<String>) -> Self {
        Self {
            directory: directory.into(),
            entries,
        }
    }

    /// Directory this snapshot was taken from
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry name at `index`, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, name)| (i, name.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    pub fn from_is_directory(is_directory: bool) -> Self {
        if is_directory {
            Self::Directory
        } else {
            Self::File
        }
    }

    pub fn is_directory(self) -> bool {
        self == Self::Directory
    }

    /// Label shown in directory listings
    pub fn label(self) -> &'static str {
        match self {
            Self::Directory => "📁 Folder",
            Self::File => "📄 File",
        }
    }
}

/// Non-error outcomes of [`Navigator::navigate`](crate::core::Navigator::navigate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// The current path moved into this directory
    Entered(PathBuf),
    /// The entry is a file; the current path is unchanged
    NotADirectory(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOperation {
    Copy,
    Move,
    Delete,
}

impl BatchOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Delete => "delete",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Copy => "copied",
            Self::Move => "moved",
            Self::Delete => "deleted",
        }
    }
}

impl fmt::Display for BatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a batch run over the selection.
///
/// `attempted` is the size of the selection when the batch started, whether
/// or not every entry still existed or was reached before a failure.
#[derive(Debug)]
pub struct BatchReport {
    pub operation: BatchOperation,
    pub attempted: usize,
    pub completed: usize,
    pub skipped: usize,
    pub error: Option<FileNavigatorError>,
}

impl BatchReport {
    pub fn new(operation: BatchOperation, attempted: usize) -> Self {
        Self {
            operation,
            attempted,
            completed: 0,
            skipped: 0,
            error: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Converts the report into the attempted count, or the first failure
    pub fn into_result(self) -> Result<usize> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.attempted),
        }
    }
}
