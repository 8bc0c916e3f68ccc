//! Input errors: markup that could not be obtained for analysis.

use super::error_code::{self, PhishlensErrorCode};

/// Raised at the boundary when page markup cannot be read. These never
/// reach the analysis core; callers report "unable to analyze" instead.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Unable to read {source_name}: {message}")]
    Unreadable { source_name: String, message: String },

    #[error("Input from {source_name} is not valid UTF-8")]
    NotUtf8 { source_name: String },
}

impl PhishlensErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
