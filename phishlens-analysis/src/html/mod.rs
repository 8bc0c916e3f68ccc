//! HTML signal extraction: the tag/attribute lists the feature extractor
//! consumes.

pub mod parser;
pub mod signals;

pub use parser::extract_html_signals;
pub use signals::{FormSignal, HtmlSignals};
