//! Directory tree building
//!
//! `TreeBuilder` lists a base directory depth-first into an immutable `Entry`
//! tree, along with the directory/file counters and the column depth the
//! renderer needs. The whole tree is built before anything is rendered.

mod builder;
mod config;
mod utils;

pub use builder::{BuiltTree, TreeBuilder, build_tree};
pub use config::TreeConfig;
pub use utils::{compare_paths, glob_match, normalize_path, should_ignore_name, sort_key};
