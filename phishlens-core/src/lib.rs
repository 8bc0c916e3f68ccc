//! Shared foundation for phishlens: heuristic tables, error enums,
//! layered configuration and tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
