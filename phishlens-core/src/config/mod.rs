//! Configuration system for phishlens.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod output_config;
pub mod phishlens_config;

pub use analysis_config::AnalysisConfig;
pub use output_config::OutputConfig;
pub use phishlens_config::{CliOverrides, PhishlensConfig};
