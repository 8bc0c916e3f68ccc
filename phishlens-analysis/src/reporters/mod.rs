//! Reporters: output formats for verdicts.

pub mod console;
pub mod json;

use crate::rules::Verdict;

/// One analyzed page as handed to a reporter.
#[derive(Debug, Clone)]
pub struct PageReport {
    pub url: String,
    pub verdict: Verdict,
}

impl PageReport {
    pub fn new(url: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            url: url.into(),
            verdict,
        }
    }
}

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, reports: &[PageReport]) -> Result<String, String>;
}

/// Options shared by reporters that render for a terminal.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub use_color: bool,
    pub show_features: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            use_color: true,
            show_features: false,
        }
    }
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str, options: ReportOptions) -> Option<Box<dyn Reporter>> {
    match format {
        "json" => Some(Box::new(json::JsonReporter)),
        "console" => Some(Box::new(console::ConsoleReporter::new(
            options.use_color,
            options.show_features,
        ))),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    phishlens_core::constants::OUTPUT_FORMATS
}
