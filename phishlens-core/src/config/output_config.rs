//! Output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUTPUT_FORMAT;

/// How verdicts are rendered by the command-line front end.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Reporter name: "console" or "json". Default: "console".
    pub format: Option<String>,
    /// ANSI colors in console output. Default: true.
    pub color: Option<bool>,
    /// Include the feature snapshot in console output. Default: false.
    pub show_features: Option<bool>,
}

impl OutputConfig {
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_OUTPUT_FORMAT)
    }

    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn effective_show_features(&self) -> bool {
        self.show_features.unwrap_or(false)
    }
}
