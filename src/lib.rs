//! treep - list directory contents as an ASCII-art tree

pub mod entry;
pub mod error;
pub mod lister;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use entry::Entry;
pub use error::{Result, TreeError};
pub use lister::{ListReport, Lister, summary_line};
pub use output::{Grid, OutputConfig, render_tree};
pub use tree::{BuiltTree, TreeBuilder, TreeConfig, build_tree};
