//! Local filesystem implementation backed by `std::fs`.

use super::{ensure_not_nested, resolve_target, Filesystem};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// The real filesystem of the machine the tool runs on.
///
/// Listings are sorted by name so that indices stay the same between two
/// listings of an unchanged directory. Names that are not valid UTF-8 are
/// converted lossily.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_directory(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    fn copy_entry(&self, source: &Path, destination: &Path) -> io::Result<()> {
        let target = resolve_target(source, destination, destination.is_dir())?;
        if source.is_dir() {
            copy_tree(source, &target)
        } else {
            ensure_distinct(source, &target)?;
            fs::copy(source, &target).map(|_| ())
        }
    }

    fn move_entry(&self, source: &Path, destination: &Path) -> io::Result<()> {
        let target = resolve_target(source, destination, destination.is_dir())?;
        match fs::rename(source, &target) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                log::debug!(
                    "Rename of {} crosses devices, falling back to copy and delete",
                    source.display()
                );
                if source.is_dir() {
                    copy_tree(source, &target)?;
                    fs::remove_dir_all(source)
                } else {
                    ensure_distinct(source, &target)?;
                    fs::copy(source, &target)?;
                    fs::remove_file(source)
                }
            }
            Err(e) => Err(e),
        }
    }

    fn delete_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn delete_directory(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }
}

/// `fs::copy` truncates its target before reading, so a file copied onto
/// itself would come out empty.
fn ensure_distinct(source: &Path, target: &Path) -> io::Result<()> {
    if let (Ok(a), Ok(b)) = (fs::canonicalize(source), fs::canonicalize(target)) {
        if a == b {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "'{}' and '{}' are the same file",
                    source.display(),
                    target.display()
                ),
            ));
        }
    }
    Ok(())
}

fn copy_tree(source: &Path, target: &Path) -> io::Result<()> {
    ensure_not_nested(source, target)?;

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let dest = if relative.as_os_str().is_empty() {
            target.to_path_buf()
        } else {
            target.join(relative)
        };

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}
