//! Top-level phishlens configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, OutputConfig};
use crate::constants::OUTPUT_FORMATS;
use crate::errors::ConfigError;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "phishlens.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PHISHLENS_*`)
/// 3. Project config (`phishlens.toml` in the working directory)
/// 4. User config (`~/.phishlens/config.toml`)
/// 5. Compiled defaults
///
/// Only the pipeline around the rules is configurable. Brand keywords,
/// TLDs and rule thresholds are compiled in.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PhishlensConfig {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_html_bytes: Option<u64>,
    pub format: Option<String>,
    pub color: Option<bool>,
    pub show_features: Option<bool>,
}

impl PhishlensConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        // An unreadable user config is not fatal.
                        ::tracing::warn!(error = %e, "skipping user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PhishlensConfig) -> Result<(), ConfigError> {
        if config.analysis.max_html_bytes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.max_html_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref format) = config.output.format {
            if !OUTPUT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "output.format".to_string(),
                    message: format!(
                        "unknown format '{format}', expected one of: {}",
                        OUTPUT_FORMATS.join(", ")
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.phishlens/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".phishlens").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut PhishlensConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PhishlensConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some`.
    fn merge(base: &mut PhishlensConfig, other: &PhishlensConfig) {
        if other.analysis.max_html_bytes.is_some() {
            base.analysis.max_html_bytes = other.analysis.max_html_bytes;
        }

        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
        if other.output.color.is_some() {
            base.output.color = other.output.color;
        }
        if other.output.show_features.is_some() {
            base.output.show_features = other.output.show_features;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PHISHLENS_ANALYSIS_MAX_HTML_BYTES`, `PHISHLENS_OUTPUT_FORMAT`, ...
    fn apply_env_overrides(config: &mut PhishlensConfig) {
        if let Ok(val) = std::env::var("PHISHLENS_ANALYSIS_MAX_HTML_BYTES") {
            if let Ok(v) = val.parse::<u64>() {
                config.analysis.max_html_bytes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PHISHLENS_OUTPUT_FORMAT") {
            config.output.format = Some(val);
        }
        if let Ok(val) = std::env::var("PHISHLENS_OUTPUT_COLOR") {
            if let Ok(v) = val.parse::<bool>() {
                config.output.color = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PhishlensConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_html_bytes {
            config.analysis.max_html_bytes = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.output.format = Some(v.clone());
        }
        if let Some(v) = cli.color {
            config.output.color = Some(v);
        }
        if let Some(v) = cli.show_features {
            config.output.show_features = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
