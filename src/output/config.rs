//! Output configuration types

/// Configuration for rendering and writing listings.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Label entries with their full path instead of their name.
    pub full_path: bool,
    pub use_color: bool,
    /// Write a JSON report per directory instead of the ASCII tree.
    pub json: bool,
}
