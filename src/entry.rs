//! Immutable tree node for one filesystem entry
//!
//! An `Entry` is a file or a directory positioned relative to the base
//! directory of a listing. Besides its path it carries the bookkeeping the
//! renderer relies on: its depth below the base directory and the number of
//! entries transitively beneath it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, TreeError};
use crate::tree::sort_key;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    path: PathBuf,
    is_dir: bool,
    depth: usize,
    descendants: usize,
    children: Vec<Entry>,
}

impl Entry {
    /// Build an entry, checking that:
    ///
    /// - files have no children,
    /// - every child sits exactly one level below this entry,
    /// - children are sorted case-insensitively by path.
    ///
    /// The descendant count is derived from the children.
    pub fn new(path: PathBuf, is_dir: bool, depth: usize, children: Vec<Entry>) -> Result<Self> {
        if !is_dir && !children.is_empty() {
            return Err(TreeError::InvalidEntry(format!(
                "file '{}' cannot have children",
                path.display()
            )));
        }

        if let Some(child) = children.iter().find(|c| c.depth != depth + 1) {
            return Err(TreeError::InvalidEntry(format!(
                "child '{}' has depth {}, expected {}",
                child.path.display(),
                child.depth,
                depth + 1
            )));
        }

        let keys: Vec<_> = children.iter().map(|c| sort_key(&c.path)).collect();
        if let Some(i) = keys.windows(2).position(|w| w[0] > w[1]) {
            return Err(TreeError::InvalidEntry(format!(
                "children of '{}' out of order: '{}' before '{}'",
                path.display(),
                children[i].path.display(),
                children[i + 1].path.display()
            )));
        }

        let descendants = children.iter().map(|c| 1 + c.descendants).sum();

        Ok(Self {
            path,
            is_dir,
            depth,
            descendants,
            children,
        })
    }

    /// Leaf entry for a regular file.
    pub fn file(path: PathBuf, depth: usize) -> Self {
        Self {
            path,
            is_dir: false,
            depth,
            descendants: 0,
            children: Vec::new(),
        }
    }

    /// Build an entry whose depth is the number of path components between
    /// `base_dir` and `path`. Fails if `path` does not live under `base_dir`.
    pub fn with_base_dir(
        base_dir: &Path,
        path: PathBuf,
        is_dir: bool,
        children: Vec<Entry>,
    ) -> Result<Self> {
        let depth = path
            .strip_prefix(base_dir)
            .map_err(|_| {
                TreeError::InvalidEntry(format!(
                    "'{}' is not below base directory '{}'",
                    path.display(),
                    base_dir.display()
                ))
            })?
            .components()
            .count();
        Self::new(path, is_dir, depth, children)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of entries beneath this one, not counting itself.
    pub fn descendants(&self) -> usize {
        self.descendants
    }

    pub fn children(&self) -> &[Entry] {
        &self.children
    }

    /// Final path component, or the whole path when it has none (`.`, `..`, `/`).
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    /// Depth of the deepest entry in this subtree.
    pub fn deepest(&self) -> usize {
        self.children
            .iter()
            .map(Entry::deepest)
            .max()
            .unwrap_or(self.depth)
    }
}
