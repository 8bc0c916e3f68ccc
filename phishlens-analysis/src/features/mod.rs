//! Feature extraction: 14 lexical URL and structural HTML signals.
//!
//! - `url_features`: host shape, scheme, path tricks
//! - `content_features`: link, resource, form and meta-keyword checks
//! - `brands`: keyword matchers over the fixed brand and TLD tables
//! - `record`: the `FeatureRecord` value type
//! - `extractor`: wires the above into one record per page

pub mod brands;
pub mod content_features;
pub mod extractor;
pub mod record;
pub mod url_features;

pub use extractor::FeatureExtractor;
pub use record::FeatureRecord;
