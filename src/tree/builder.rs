//! TreeBuilder - walks a base directory into an in-memory `Entry` tree
//!
//! Every directory is listed exactly once. Each recursive call returns its
//! own subtree together with the counters gathered below it, and the caller
//! folds those into its own result; nothing is shared between calls.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::entry::Entry;
use crate::error::{Result, TreeError};

use super::config::TreeConfig;
use super::utils::{should_ignore_name, sort_key};

/// A built tree plus the aggregate counters collected while walking it.
#[derive(Debug, Clone)]
pub struct BuiltTree {
    pub root: Entry,
    /// Deepest column the renderer needs: the depth of every visited
    /// directory, plus one if it directly contains files.
    pub tree_depth: usize,
    /// Directories below the root, not counting the root.
    pub directories: usize,
    pub files: usize,
}

/// Immediate children of one directory, split by kind.
struct Listing {
    subdirs: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

pub struct TreeBuilder {
    config: TreeConfig,
}

impl TreeBuilder {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Walk `base_dir` and build its tree. Any directory that cannot be
    /// listed fails the whole build; no partial tree is returned.
    pub fn build(&self, base_dir: &Path) -> Result<BuiltTree> {
        self.build_dir(base_dir, base_dir, 0)
    }

    fn build_dir(&self, base_dir: &Path, dir: &Path, depth: usize) -> Result<BuiltTree> {
        let listing = self.read_listing(dir)?;
        debug!(
            path = %dir.display(),
            depth,
            subdirs = listing.subdirs.len(),
            files = listing.files.len(),
            "listed directory"
        );

        let mut tree_depth = depth + usize::from(bumps_tree_depth(&listing));
        let mut directories = 0;
        let mut files = 0;
        let mut children = Vec::new();

        if !self.config.at_max_depth(depth) {
            for subdir in &listing.subdirs {
                let sub = self.build_dir(base_dir, subdir, depth + 1)?;
                directories += 1 + sub.directories;
                files += sub.files;
                tree_depth = tree_depth.max(sub.tree_depth);
                children.push(sub.root);
            }

            if !self.config.dirs_only {
                files += listing.files.len();
                children.extend(
                    listing
                        .files
                        .into_iter()
                        .map(|path| Entry::file(path, depth + 1)),
                );
            }
        }

        children.sort_by_cached_key(|c| sort_key(c.path()));
        let root = Entry::with_base_dir(base_dir, dir.to_path_buf(), true, children)?;

        Ok(BuiltTree {
            root,
            tree_depth,
            directories,
            files,
        })
    }

    /// List the immediate children of `dir`. Symlinks and special files are
    /// skipped, as are names matching an ignore pattern.
    fn read_listing(&self, dir: &Path) -> Result<Listing> {
        let entries = std::fs::read_dir(dir).map_err(|e| TreeError::enumeration(dir, e))?;

        let mut listing = Listing {
            subdirs: Vec::new(),
            files: Vec::new(),
        };

        for entry in entries {
            let entry = entry.map_err(|e| TreeError::enumeration(dir, e))?;
            let name = entry.file_name();
            if should_ignore_name(&name.to_string_lossy(), &self.config.ignore_patterns) {
                trace!(path = %entry.path().display(), "ignored by pattern");
                continue;
            }

            // `DirEntry::file_type` does not follow symlinks
            let file_type = entry
                .file_type()
                .map_err(|e| TreeError::enumeration(entry.path(), e))?;
            if file_type.is_dir() {
                listing.subdirs.push(entry.path());
            } else if file_type.is_file() {
                listing.files.push(entry.path());
            } else {
                trace!(path = %entry.path().display(), "skipping special entry");
            }
        }

        Ok(listing)
    }
}

/// Whether a directory pushes the tree depth one column past its own.
///
/// This looks at the raw file listing even in dirs-only mode, where those
/// files are never shown; the extra column then stays empty. Changing that
/// would narrow the render grid, so it is kept in one place.
fn bumps_tree_depth(listing: &Listing) -> bool {
    !listing.files.is_empty()
}

/// Build the tree for `base_dir` with the given options.
pub fn build_tree(base_dir: &Path, dirs_only: bool, max_depth: Option<usize>) -> Result<BuiltTree> {
    let config = TreeConfig::default()
        .with_dirs_only(dirs_only)
        .with_max_depth(max_depth);
    TreeBuilder::new(config).build(base_dir)
}
