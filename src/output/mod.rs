//! Tree rendering and output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `grid` - Lays a built tree out on a grid of text cells
//! - `json` - JSON report output

mod config;
mod grid;
mod json;

pub use config::OutputConfig;
pub use grid::{BLANK, BRANCH, Grid, LAST_BRANCH, RAIL, entry_label, render_tree};
pub use json::{JsonReport, render_json};
