//! Predefined directory layouts
//!
//! Each scenario returns a workspace laid out as:
//!
//! ```text
//! <root>/
//!   work/   <- where sessions start
//!   dest/   <- copy and move target
//! ```

#![allow(dead_code)]

use super::workspace::*;
use file_navigator::core::error::Result;

/// Scenario: `work` holds `a.txt` and a `sub` directory with one file
pub fn create_file_and_dir_workspace() -> Result<TestWorkspace> {
    let ws = setup_workspace()?;
    create_file(ws.path(), "work/a.txt", "alpha\n")?;
    create_file(ws.path(), "work/sub/inner.txt", "inner\n")?;
    create_dir(ws.path(), "dest")?;
    Ok(ws)
}

/// Scenario: `work` holds three plain files
pub fn create_multi_file_workspace() -> Result<TestWorkspace> {
    let ws = setup_workspace()?;
    create_dir(ws.path(), "work")?;
    create_test_files(&ws.join("work"), &["file1.txt", "file2.txt", "file3.txt"])?;
    create_dir(ws.path(), "dest")?;
    Ok(ws)
}
