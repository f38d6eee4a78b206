//! Lists base directories: build, render, write, summarize
//!
//! Each base directory is handled on its own. A path that is not a
//! directory, or a tree that cannot be walked, gets a diagnostic on the
//! error sink and the remaining directories are still listed. Only a failure
//! to write to a sink stops the run.

use std::io::{self, Write};
use std::path::Path;

use termcolor::WriteColor;
use tracing::{info, warn};

use crate::error::TreeError;
use crate::output::{JsonReport, OutputConfig, render_json, render_tree};
use crate::tree::{BuiltTree, TreeBuilder, TreeConfig, normalize_path};

/// Outcome of a run over several base directories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListReport {
    pub listed: usize,
    pub skipped: usize,
}

pub struct Lister {
    builder: TreeBuilder,
    output: OutputConfig,
}

impl Lister {
    pub fn new(tree: TreeConfig, output: OutputConfig) -> Self {
        Self {
            builder: TreeBuilder::new(tree),
            output,
        }
    }

    /// List every directory in `dirs`, in order.
    pub fn list<P, W, E>(&self, dirs: &[P], out: &mut W, err: &mut E) -> io::Result<ListReport>
    where
        P: AsRef<Path>,
        W: WriteColor + ?Sized,
        E: Write + ?Sized,
    {
        let mut report = ListReport::default();

        for dir in dirs {
            let dir = dir.as_ref();
            match self.list_one(dir, out)? {
                Ok(()) => report.listed += 1,
                Err(e) => {
                    warn!(path = %dir.display(), error = %e, "skipping base directory");
                    writeln!(err, "{}", e)?;
                    report.skipped += 1;
                }
            }
            out.flush()?;
        }

        Ok(report)
    }

    /// The outer result carries sink failures, the inner one listing failures.
    fn list_one<W>(&self, dir: &Path, out: &mut W) -> io::Result<Result<(), TreeError>>
    where
        W: WriteColor + ?Sized,
    {
        if !dir.is_dir() {
            return Ok(Err(TreeError::NotADirectory {
                path: dir.to_path_buf(),
            }));
        }

        let base = normalize_path(dir);
        let built = match self.builder.build(&base) {
            Ok(built) => built,
            Err(e) => return Ok(Err(e)),
        };
        info!(
            path = %base.display(),
            directories = built.directories,
            files = built.files,
            "built tree"
        );

        if self.output.json {
            let report = JsonReport {
                directory: &base,
                tree: &built.root,
                directories: built.directories,
                files: built.files,
            };
            let json = match render_json(&report) {
                Ok(json) => json,
                Err(source) => return Ok(Err(TreeError::Serialize { path: base, source })),
            };
            writeln!(out, "{}", json)?;
            return Ok(Ok(()));
        }

        let grid = match render_tree(&built.root, built.tree_depth, self.output.full_path) {
            Ok(grid) => grid,
            Err(e) => return Ok(Err(e)),
        };
        grid.write_to(out)?;
        writeln!(out)?;
        writeln!(out, "{}", summary_line(&built))?;
        Ok(Ok(()))
    }
}

/// `N directories, M files`, singular for a count of one.
pub fn summary_line(built: &BuiltTree) -> String {
    format!(
        "{}, {}",
        plural(built.directories, "directory", "directories"),
        plural(built.files, "file", "files")
    )
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}
