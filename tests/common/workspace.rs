//! Temporary directory trees for tests
//!
//! Provides a `TestWorkspace` owning a temporary directory plus helpers to
//! populate it and to build sessions on top of it.

#![allow(dead_code)]

use file_navigator::core::error::Result;
use file_navigator::{LocalFilesystem, Session};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

/// A temporary directory that lives as long as the test holds it.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Builds a session on the real filesystem starting at `relative`
    pub fn session_at(&self, relative: &str) -> Session {
        Session::new(self.join(relative), Rc::new(LocalFilesystem::new()))
    }
}

/// Creates an empty temporary workspace
pub fn setup_workspace() -> Result<TestWorkspace> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();
    Ok(TestWorkspace { temp_dir, path })
}

/// Creates a file, including missing parent directories
pub fn create_file(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Creates a directory, including missing parents
pub fn create_dir(root: &Path, relative: &str) -> Result<()> {
    fs::create_dir_all(root.join(relative))?;
    Ok(())
}

/// Creates files with numbered content
pub fn create_test_files(root: &Path, names: &[&str]) -> Result<()> {
    for (i, name) in names.iter().enumerate() {
        create_file(root, name, &format!("content{}\n", i + 1))?;
    }
    Ok(())
}

/// Removes a file behind the session's back
pub fn remove_file(root: &Path, relative: &str) -> Result<()> {
    fs::remove_file(root.join(relative))?;
    Ok(())
}

pub fn read_file(root: &Path, relative: &str) -> Result<String> {
    Ok(fs::read_to_string(root.join(relative))?)
}
