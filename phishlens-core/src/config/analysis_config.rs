//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the analysis pipeline around the rule core.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Markup beyond this many bytes is dropped before parsing. Unset means
    /// the whole document is parsed.
    pub max_html_bytes: Option<u64>,
}

impl AnalysisConfig {
    /// Returns the markup cap, if one was configured.
    pub fn effective_max_html_bytes(&self) -> Option<u64> {
        self.max_html_bytes
    }
}
