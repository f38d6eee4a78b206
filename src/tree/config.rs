//! Configuration types for the tree builder

/// Options controlling which entries end up in a built tree.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Leave regular files out of the tree and the counters.
    pub dirs_only: bool,
    /// Deepest level whose directories are descended into. `None` is unbounded.
    pub max_depth: Option<usize>,
    /// Entry names (exact or glob) skipped during enumeration.
    pub ignore_patterns: Vec<String>,
}

impl TreeConfig {
    pub fn with_dirs_only(mut self, dirs_only: bool) -> Self {
        self.dirs_only = dirs_only;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check if directories at `depth` are shown without being descended into.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
