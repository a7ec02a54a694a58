//! Batch copy, move and delete over the current selection.
//!
//! Every batch walks the selection in order, stops at the first filesystem
//! failure and clears the selection afterwards whether or not it failed.
//! Entries after a failing one are never attempted, so a failed batch can
//! leave part of the selection unprocessed while still forgetting it.

use crate::core::{
    error::FileNavigatorError,
    filesystem::Filesystem,
    selector::Selector,
    state::{BatchOperation, BatchReport},
};
use std::io;
use std::path::Path;
use std::rc::Rc;

pub struct BatchOperator {
    filesystem: Rc<dyn Filesystem>,
}

enum Step {
    Done,
    Skipped,
}

impl BatchOperator {
    pub fn new(filesystem: Rc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Copies every selected path that still exists into `destination`.
    pub fn copy_all(&self, selector: &mut Selector, destination: &Path) -> BatchReport {
        self.run(selector, BatchOperation::Copy, |fs, path| {
            if !fs.exists(path) {
                return Ok(Step::Skipped);
            }
            fs.copy_entry(path, destination).map(|()| Step::Done)
        })
    }

    /// Moves every selected path that still exists into `destination`.
    pub fn move_all(&self, selector: &mut Selector, destination: &Path) -> BatchReport {
        self.run(selector, BatchOperation::Move, |fs, path| {
            if !fs.exists(path) {
                return Ok(Step::Skipped);
            }
            fs.move_entry(path, destination).map(|()| Step::Done)
        })
    }

    /// Deletes every selected path, recursing into directories.
    ///
    /// Existence is not checked first: a path that vanished since it was
    /// selected fails the batch.
    pub fn delete_all(&self, selector: &mut Selector) -> BatchReport {
        self.run(selector, BatchOperation::Delete, |fs, path| {
            let deleted = if fs.is_directory(path) {
                fs.delete_directory(path)
            } else {
                fs.delete_file(path)
            };
            deleted.map(|()| Step::Done)
        })
    }

    fn run<F>(&self, selector: &mut Selector, operation: BatchOperation, mut apply: F) -> BatchReport
    where
        F: FnMut(&dyn Filesystem, &Path) -> io::Result<Step>,
    {
        let mut report = BatchReport::new(operation, selector.len());

        for path in selector.selection() {
            match apply(self.filesystem.as_ref(), path) {
                Ok(Step::Done) => report.completed += 1,
                Ok(Step::Skipped) => {
                    log::debug!("Skipping {}: no longer exists", path.display());
                    report.skipped += 1;
                }
                Err(e) => {
                    log::warn!("{operation} of {} failed: {e}", path.display());
                    report.error = Some(FileNavigatorError::filesystem_op(operation, path, e));
                    break;
                }
            }
        }

        selector.clear();
        log::debug!(
            "{operation} batch finished: {} attempted, {} completed, {} skipped",
            report.attempted,
            report.completed,
            report.skipped
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filesystem::InMemoryFilesystem;

    struct Fixture {
        fs: Rc<InMemoryFilesystem>,
        selector: Selector,
        operator: BatchOperator,
    }

    fn fixture(indices: &str) -> Fixture {
        let fs = Rc::new(InMemoryFilesystem::new());
        fs.add_file("/src/a.txt", "alpha");
        fs.add_file("/src/b.txt", "beta");
        fs.add_file("/src/sub/inner.txt", "inner");
        fs.add_directory("/dest");

        let mut selector = Selector::new(fs.clone());
        selector.load_listing(Path::new("/src")).unwrap();
        selector
            .select_by_indices(indices, Path::new("/src"))
            .unwrap();
        let operator = BatchOperator::new(fs.clone());
        Fixture {
            fs,
            selector,
            operator,
        }
    }

    #[test]
    fn test_copy_all() {
        let mut f = fixture("0,1");
        let report = f.operator.copy_all(&mut f.selector, Path::new("/dest"));
        assert!(report.is_success());
        assert_eq!(report.attempted, 2);
        assert_eq!(report.completed, 2);
        assert!(f.fs.contains("/dest/a.txt"));
        assert!(f.fs.contains("/dest/b.txt"));
        assert!(f.fs.contains("/src/a.txt"));
        assert!(f.selector.is_empty());
    }

    #[test]
    fn test_copy_skips_vanished_paths_but_counts_them() {
        let mut f = fixture("0,1");
        f.fs.remove("/src/b.txt");
        let report = f.operator.copy_all(&mut f.selector, Path::new("/dest"));
        assert!(report.is_success());
        assert_eq!(report.attempted, 2);
        assert_eq!(report.completed, 1);
        assert_eq!(report.skipped, 1);
        assert!(f.fs.contains("/dest/a.txt"));
        assert!(f.selector.is_empty());
    }

    #[test]
    fn test_copy_stops_on_first_error_and_clears() {
        let mut f = fixture("0,1");
        f.fs.fail_on("/src/a.txt");
        let report = f.operator.copy_all(&mut f.selector, Path::new("/dest"));
        assert!(matches!(
            report.error,
            Some(FileNavigatorError::FilesystemOp {
                operation: BatchOperation::Copy,
                ..
            })
        ));
        assert_eq!(report.completed, 0);
        assert!(!f.fs.contains("/dest/b.txt"));
        assert!(f.selector.is_empty());
    }

    #[test]
    fn test_move_all() {
        let mut f = fixture("2");
        let report = f.operator.move_all(&mut f.selector, Path::new("/dest"));
        assert!(report.is_success());
        assert!(!f.fs.contains("/src/sub"));
        assert!(f.fs.contains("/dest/sub/inner.txt"));
        assert!(f.selector.is_empty());
    }

    #[test]
    fn test_move_into_missing_destination_fails() {
        let mut f = fixture("0");
        let report = f
            .operator
            .move_all(&mut f.selector, Path::new("/nowhere/a.txt"));
        assert!(!report.is_success());
        assert!(f.fs.contains("/src/a.txt"));
        assert!(f.selector.is_empty());
    }

    #[test]
    fn test_delete_dispatches_on_kind() {
        let mut f = fixture("0,2");
        let report = f.operator.delete_all(&mut f.selector);
        assert!(report.is_success());
        assert_eq!(report.completed, 2);
        assert!(!f.fs.contains("/src/a.txt"));
        assert!(!f.fs.contains("/src/sub"));
        assert!(f.fs.contains("/src/b.txt"));
    }

    #[test]
    fn test_delete_vanished_path_fails_batch() {
        let mut f = fixture("0,1");
        f.fs.remove("/src/a.txt");
        let report = f.operator.delete_all(&mut f.selector);
        assert!(!report.is_success());
        assert_eq!(report.attempted, 2);
        assert!(f.fs.contains("/src/b.txt"));
        assert!(f.selector.is_empty());
    }

    #[test]
    fn test_empty_selection_is_a_successful_noop() {
        let mut f = fixture("99");
        let report = f.operator.delete_all(&mut f.selector);
        assert!(report.is_success());
        assert_eq!(report.attempted, 0);
    }
}
