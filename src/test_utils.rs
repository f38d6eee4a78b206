//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree, removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a tree `width` entries wide and `depth` levels deep: every
    /// directory gets `width` files and `width` subdirectories.
    pub fn populate(&self, width: usize, depth: usize) {
        fn fill(dir: &Path, width: usize, depth: usize) {
            for i in 0..width {
                fs::write(dir.join(format!("file_{}.txt", i)), "x").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for i in 0..width {
                let sub = dir.join(format!("dir_{}", i));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, width, depth - 1);
            }
        }
        fill(self.dir.path(), width, depth);
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
