//! Selection of entries by index against a listing snapshot.
//!
//! [`Selector`] keeps the last listing it loaded and the absolute paths
//! picked from it. It never asks the navigator where it is: the directory
//! path is passed in on every call, so the driver decides which directory a
//! selection belongs to.
//!
//! # Resolution policy
//! Indices outside `0..listing.len()` are dropped without error. Parsing, on
//! the other hand, is strict: one bad token rejects the input and the
//! previous selection survives untouched.

use crate::core::{
    error::{FileNavigatorError, Result},
    filesystem::Filesystem,
    index_parser::IndexParser,
    state::DirectoryListing,
};
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub struct Selector {
    last_listing: DirectoryListing,
    selection: Vec<PathBuf>,
    filesystem: Rc<dyn Filesystem>,
}

impl Selector {
    pub fn new(filesystem: Rc<dyn Filesystem>) -> Self {
        Self {
            last_listing: DirectoryListing::default(),
            selection: Vec::new(),
            filesystem,
        }
    }

    /// Lists `directory_path` and keeps the result as the index snapshot.
    ///
    /// On failure the previous snapshot is kept.
    pub fn load_listing(&mut self, directory_path: &Path) -> Result<DirectoryListing> {
        let entries = self
            .filesystem
            .list_directory(directory_path)
            .map_err(|e| FileNavigatorError::access(directory_path, e))?;

        log::debug!(
            "Loaded {} entries from {}",
            entries.len(),
            directory_path.display()
        );
        self.last_listing = DirectoryListing::new(directory_path, entries);
        Ok(self.last_listing.clone())
    }

    /// Replaces the selection with the entries named by `indices_text`.
    pub fn select_by_indices(
        &mut self,
        indices_text: &str,
        directory_path: &Path,
    ) -> Result<Vec<PathBuf>> {
        let indices = IndexParser::parse(indices_text)?;

        if self.last_listing.directory() != directory_path {
            log::warn!(
                "Resolving indices for {} against a listing of {}",
                directory_path.display(),
                self.last_listing.directory().display()
            );
        }

        let listing = &self.last_listing;
        self.selection = indices
            .into_iter()
            .filter_map(|index| {
                let resolved = IndexParser::resolve(index, listing.len());
                if resolved.is_none() {
                    log::debug!("Dropping out-of-range index {index}");
                }
                resolved
            })
            .filter_map(|index| listing.get(index))
            .map(|name| directory_path.join(name))
            .collect();

        log::debug!("Selected {} path(s)", self.selection.len());
        Ok(self.selection.clone())
    }

    pub fn selection(&self) -> &[PathBuf] {
        &self.selection
    }

    pub fn last_listing(&self) -> &DirectoryListing {
        &self.last_listing
    }

    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }
}
