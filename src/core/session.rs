//! Wiring of the navigator, selector and batch operator.
//!
//! This module provides [`Session`], the one place where a [`Filesystem`] is
//! chosen and handed to every component. Commands receive a `&mut Session`
//! and never construct components themselves.
//!
//! # Initialization Steps
//! 1. **Start directory**: explicit argument, then config, then home directory
//! 2. **Filesystem**: [`LocalFilesystem`] for the binary, anything else in tests
//! 3. **Components**: navigator at the start directory, empty selection

use crate::core::{
    batch::BatchOperator,
    config::AppConfig,
    dirs::get_home_directory,
    error::{FileNavigatorError, Result},
    filesystem::{Filesystem, LocalFilesystem},
    navigator::Navigator,
    selector::Selector,
    state::{BatchReport, DirectoryListing},
};
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub struct Session {
    pub navigator: Navigator,
    pub selector: Selector,
    pub batch: BatchOperator,
}

impl Session {
    pub fn new(start_path: impl Into<PathBuf>, filesystem: Rc<dyn Filesystem>) -> Self {
        Self {
            navigator: Navigator::new(start_path, filesystem.clone()),
            selector: Selector::new(filesystem.clone()),
            batch: BatchOperator::new(filesystem),
        }
    }

    /// Builds a session on the local filesystem
    pub fn initialize(start_dir: Option<PathBuf>, config: &AppConfig) -> Result<Self> {
        let start = Self::resolve_start_directory(start_dir, config)?;
        log::debug!("Starting session in {}", start.display());
        Ok(Self::new(start, Rc::new(LocalFilesystem::new())))
    }

    /// Picks the start directory: argument, then config, then home.
    ///
    /// Relative choices are made absolute against the working directory.
    pub fn resolve_start_directory(
        start_dir: Option<PathBuf>,
        config: &AppConfig,
    ) -> Result<PathBuf> {
        let chosen = match start_dir.or_else(|| config.start_directory.clone()) {
            Some(dir) => dir,
            None => get_home_directory()?,
        };
        std::path::absolute(&chosen).map_err(|e| FileNavigatorError::access(&chosen, e))
    }

    pub fn current_path(&self) -> &Path {
        self.navigator.current_path()
    }

    /// Snapshots the current directory into the selector
    pub fn load_current_listing(&mut self) -> Result<DirectoryListing> {
        let current = self.navigator.current_path().to_path_buf();
        self.selector.load_listing(&current)
    }

    /// Selects from the last loaded snapshot, resolving against the current path
    pub fn select(&mut self, indices_text: &str) -> Result<Vec<PathBuf>> {
        let current = self.navigator.current_path().to_path_buf();
        self.selector.select_by_indices(indices_text, &current)
    }

    pub fn copy_selection(&mut self, destination: &Path) -> BatchReport {
        self.batch.copy_all(&mut self.selector, destination)
    }

    pub fn move_selection(&mut self, destination: &Path) -> BatchReport {
        self.batch.move_all(&mut self.selector, destination)
    }

    pub fn delete_selection(&mut self) -> BatchReport {
        self.batch.delete_all(&mut self.selector)
    }
}
