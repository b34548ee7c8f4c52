//! Filter configuration types
//!
//! The defaults reproduce the plain stdin-to-stdout filter: no header rows are
//! skipped and malformed rows are reported but never abort the run.

use serde::{Deserialize, Serialize};

/// Configuration for a single filter run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Number of leading lines to skip before classifying rows
    #[serde(default)]
    pub header_rows: usize,

    /// Abort on the first malformed row instead of skipping it
    #[serde(default)]
    pub strict: bool,
}

impl FilterConfig {
    /// Create a new filter configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: skip this many leading lines
    pub fn with_header_rows(mut self, rows: usize) -> Self {
        self.header_rows = rows;
        self
    }

    /// Builder method: enable or disable strict mode
    pub fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }
}
