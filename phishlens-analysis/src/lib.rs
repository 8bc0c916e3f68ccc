//! phishlens analysis: turns a page URL and its markup into a Phishing /
//! Legitimate verdict with the list of axioms that fired.
//!
//! Pipeline: `url` + `html` → [`features::FeatureExtractor`] →
//! [`rules::RuleEngine`] → [`rules::Verdict`]. Every stage is total; malformed
//! input degrades to empty signals instead of failing.

pub mod analyzer;
pub mod features;
pub mod html;
pub mod reporters;
pub mod rules;
pub mod url;

pub use analyzer::{analyze, analyze_signals, Analyzer};
pub use features::{FeatureExtractor, FeatureRecord};
pub use html::{extract_html_signals, FormSignal, HtmlSignals};
pub use rules::{Axiom, DecisionStage, Label, RuleEngine, Verdict};
pub use url::HostSignals;
