//! PhishlensErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait PhishlensErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
