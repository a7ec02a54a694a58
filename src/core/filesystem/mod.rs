//! Filesystem capability used by the navigator, selector and batch operator.
//!
//! The core never touches `std::fs` directly. Every listing, classification
//! and mutation goes through the [`Filesystem`] trait so that the whole state
//! machine can run against [`InMemoryFilesystem`] in tests and against
//! [`LocalFilesystem`] in the binary.
//!
//! # Public API
//! - [`Filesystem`]: The capability trait
//! - [`LocalFilesystem`]: Real filesystem backed by `std::fs`
//! - [`InMemoryFilesystem`]: Tree held in memory, with failure injection
//!
//! # Destination rules
//! `copy_entry` and `move_entry` share one rule: when `destination` is an
//! existing directory the entry lands inside it under its own name,
//! otherwise `destination` is the full target path.

mod in_memory;
mod local;

pub use in_memory::InMemoryFilesystem;
pub use local::LocalFilesystem;

use std::io;
use std::path::{Path, PathBuf};

/// Narrow set of filesystem primitives the core depends on.
///
/// Implementations take `&self`; the in-memory double keeps its tree behind a
/// `RefCell`. All calls are blocking.
pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;

    /// False for files and for paths that do not exist
    fn is_directory(&self, path: &Path) -> bool;

    /// Entry names (no path prefix) of a directory, sorted
    fn list_directory(&self, path: &Path) -> io::Result<Vec<String>>;

    fn copy_entry(&self, source: &Path, destination: &Path) -> io::Result<()>;

    fn move_entry(&self, source: &Path, destination: &Path) -> io::Result<()>;

    fn delete_file(&self, path: &Path) -> io::Result<()>;

    /// Removes a directory and everything below it
    fn delete_directory(&self, path: &Path) -> io::Result<()>;
}

/// Applies the destination rule shared by copy and move.
pub(crate) fn resolve_target(
    source: &Path,
    destination: &Path,
    destination_is_directory: bool,
) -> io::Result<PathBuf> {
    if !destination_is_directory {
        return Ok(destination.to_path_buf());
    }

    let name = source.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' has no file name", source.display()),
        )
    })?;
    Ok(destination.join(name))
}

/// Rejects copying or moving a directory into its own subtree.
pub(crate) fn ensure_not_nested(source: &Path, target: &Path) -> io::Result<()> {
    if target.starts_with(source) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "cannot place '{}' inside itself at '{}'",
                source.display(),
                target.display()
            ),
        ));
    }
    Ok(())
}
