//! JSON output formatting

use std::path::Path;

use serde::Serialize;

use crate::entry::Entry;

/// One listed base directory, as written by `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub directory: &'a Path,
    pub tree: &'a Entry,
    pub directories: usize,
    pub files: usize,
}

/// Pretty-print the report. Fails for paths that are not valid UTF-8.
pub fn render_json(report: &JsonReport<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
