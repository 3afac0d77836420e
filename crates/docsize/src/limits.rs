//! Limits applied when classifying loose input.
//!
//! The estimator itself has no limits. These bound the classification step,
//! which walks externally supplied trees.

/// Default maximum nesting depth of loose input (matches serde_json's parser).
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for classifying loose input into [`crate::Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Maximum container nesting depth. The root container is depth 1.
    pub max_depth: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl IngestOptions {
    /// Creates default ingestion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
