//! Current-directory state and movement between directories.
//!
//! # Public API
//! - [`Navigator`]: Owns the current path and lists it through a [`Filesystem`]
//!
//! # Behavior
//! - **Fresh listings**: `navigate` always re-lists the current directory and
//!   resolves the index against that new listing
//! - **Files are not errors**: navigating into a file reports
//!   [`NavigateOutcome::NotADirectory`] and leaves the path alone
//! - **Lexical parent**: `go_to_parent` trims the last path component
//!   without touching the filesystem; at a root it stays put

use crate::core::{
    error::{FileNavigatorError, Result},
    filesystem::Filesystem,
    state::{DirectoryListing, EntryKind, NavigateOutcome},
};
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub struct Navigator {
    current_path: PathBuf,
    filesystem: Rc<dyn Filesystem>,
}

impl Navigator {
    pub fn new(start_path: impl Into<PathBuf>, filesystem: Rc<dyn Filesystem>) -> Self {
        Self {
            current_path: start_path.into(),
            filesystem,
        }
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn list_current(&self) -> Result<DirectoryListing> {
        let entries = self
            .filesystem
            .list_directory(&self.current_path)
            .map_err(|e| FileNavigatorError::access(&self.current_path, e))?;
        Ok(DirectoryListing::new(&self.current_path, entries))
    }

    pub fn describe_entry(&self, name: &str) -> EntryKind {
        EntryKind::from_is_directory(
            self.filesystem
                .is_directory(&self.current_path.join(name)),
        )
    }

    /// Lists the current directory with each entry classified
    pub fn display_entries(&self) -> Result<Vec<(usize, String, EntryKind)>> {
        let listing = self.list_current()?;
        Ok(listing
            .iter()
            .map(|(index, name)| (index, name.to_string(), self.describe_entry(name)))
            .collect())
    }

    pub fn navigate(&mut self, index: usize) -> Result<NavigateOutcome> {
        let listing = self.list_current()?;
        let name = listing
            .get(index)
            .ok_or_else(|| FileNavigatorError::index_out_of_range(index, listing.len()))?;
        let full_path = self.current_path.join(name);

        if self.filesystem.is_directory(&full_path) {
            log::debug!("Navigating into {}", full_path.display());
            self.current_path = full_path.clone();
            Ok(NavigateOutcome::Entered(full_path))
        } else {
            log::debug!("Refusing to navigate into file {}", full_path.display());
            Ok(NavigateOutcome::NotADirectory(full_path))
        }
    }

    /// Moves to the parent directory. Returns false when already at a root.
    pub fn go_to_parent(&mut self) -> bool {
        match self.current_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                self.current_path = parent.to_path_buf();
                log::debug!("Moved to parent {}", self.current_path.display());
                true
            }
            _ => {
                log::debug!(
                    "{} has no parent, staying put",
                    self.current_path.display()
                );
                false
            }
        }
    }
}
