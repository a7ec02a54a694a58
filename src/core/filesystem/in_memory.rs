//! In-memory filesystem for tests and dry runs.

use super::{ensure_not_nested, resolve_target, Filesystem};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    File(Vec<u8>),
    Directory,
}

/// A directory tree kept in a map of absolute paths.
///
/// Starts with an empty root `/`. Parents are created implicitly by
/// [`add_file`](Self::add_file) and [`add_directory`](Self::add_directory).
/// [`fail_on`](Self::fail_on) makes every mutating call on a given source
/// path return an I/O error.
#[derive(Debug)]
pub struct InMemoryFilesystem {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    failing: RefCell<BTreeSet<PathBuf>>,
}

impl Default for InMemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFilesystem {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), Node::Directory);
        Self {
            nodes: RefCell::new(nodes),
            failing: RefCell::new(BTreeSet::new()),
        }
    }

    pub fn add_directory(&self, path: impl AsRef<Path>) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Directory);
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_directory(parent);
        }
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), Node::File(contents.into()));
    }

    /// Removes a path and its subtree, as if deleted by another process
    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.nodes.borrow_mut().retain(|k, _| !k.starts_with(path));
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.nodes.borrow().contains_key(path.as_ref())
    }

    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(Node::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    pub fn fail_on(&self, path: impl AsRef<Path>) {
        self.failing
            .borrow_mut()
            .insert(path.as_ref().to_path_buf());
    }

    fn check_failure(&self, path: &Path) -> io::Result<()> {
        if self.failing.borrow().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("injected failure on '{}'", path.display()),
            ));
        }
        Ok(())
    }

    fn node(&self, path: &Path) -> Option<Node> {
        self.nodes.borrow().get(path).cloned()
    }

    fn subtree(&self, root: &Path) -> Vec<(PathBuf, Node)> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(k, _)| k.starts_with(root))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn copy_into_place(&self, source: &Path, destination: &Path) -> io::Result<()> {
        if self.node(source).is_none() {
            return Err(not_found(source));
        }

        let target = resolve_target(source, destination, self.is_directory(destination))?;
        ensure_not_nested(source, &target)?;
        if let Some(parent) = target.parent() {
            if !self.is_directory(parent) {
                return Err(not_found(parent));
            }
        }
        if self.is_directory(&target) && !self.is_directory(source) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("'{}' is a directory", target.display()),
            ));
        }

        let entries = self.subtree(source);
        let mut nodes = self.nodes.borrow_mut();
        for (path, node) in entries {
            let relative = path.strip_prefix(source).unwrap_or(Path::new(""));
            let dest = if relative.as_os_str().is_empty() {
                target.clone()
            } else {
                target.join(relative)
            };
            nodes.insert(dest, node);
        }
        Ok(())
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("'{}' does not exist", path.display()),
    )
}

impl Filesystem for InMemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.contains(path)
    }

    fn is_directory(&self, path: &Path) -> bool {
        matches!(self.node(path), Some(Node::Directory))
    }

    fn list_directory(&self, path: &Path) -> io::Result<Vec<String>> {
        match self.node(path) {
            Some(Node::Directory) => Ok(self
                .nodes
                .borrow()
                .keys()
                .filter(|k| k.parent() == Some(path))
                .filter_map(|k| k.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .collect()),
            Some(Node::File(_)) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("'{}' is not a directory", path.display()),
            )),
            None => Err(not_found(path)),
        }
    }

    fn copy_entry(&self, source: &Path, destination: &Path) -> io::Result<()> {
        self.check_failure(source)?;
        self.copy_into_place(source, destination)
    }

    fn move_entry(&self, source: &Path, destination: &Path) -> io::Result<()> {
        self.check_failure(source)?;
        self.copy_into_place(source, destination)?;
        self.remove(source);
        Ok(())
    }

    fn delete_file(&self, path: &Path) -> io::Result<()> {
        self.check_failure(path)?;
        match self.node(path) {
            Some(Node::File(_)) => {
                self.nodes.borrow_mut().remove(path);
                Ok(())
            }
            Some(Node::Directory) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("'{}' is a directory", path.display()),
            )),
            None => Err(not_found(path)),
        }
    }

    fn delete_directory(&self, path: &Path) -> io::Result<()> {
        self.check_failure(path)?;
        match self.node(path) {
            Some(Node::Directory) => {
                self.remove(path);
                Ok(())
            }
            Some(Node::File(_)) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("'{}' is not a directory", path.display()),
            )),
            None => Err(not_found(path)),
        }
    }
}
