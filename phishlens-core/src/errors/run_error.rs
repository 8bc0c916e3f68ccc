//! Top-level errors for a command-line run.

use super::error_code::PhishlensErrorCode;
use super::{ConfigError, InputError};

/// Aggregates edge errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

impl PhishlensErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
        }
    }
}
