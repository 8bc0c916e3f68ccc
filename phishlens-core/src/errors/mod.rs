//! Error handling for phishlens.
//! One error enum per edge subsystem, `thiserror` only. The analysis core is
//! total and has no error type of its own.

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod run_error;

pub use config_error::ConfigError;
pub use error_code::PhishlensErrorCode;
pub use input_error::InputError;
pub use run_error::RunError;
