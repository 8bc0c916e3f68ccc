//! Entry points: URL + markup (or pre-parsed signals) in, verdict out.

use std::time::Instant;

use phishlens_core::config::AnalysisConfig;

use crate::features::FeatureExtractor;
use crate::html::{extract_html_signals, HtmlSignals};
use crate::rules::{RuleEngine, Verdict};
use crate::url::HostSignals;

/// Analysis pipeline with its configured input limits.
#[derive(Debug, Clone)]
pub struct Analyzer {
    /// `None` parses the whole document.
    max_html_bytes: Option<usize>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl Analyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        let max_html_bytes = config
            .effective_max_html_bytes()
            .map(|cap| usize::try_from(cap).unwrap_or(usize::MAX));
        Self { max_html_bytes }
    }

    /// Classify a page from its raw markup. With a byte cap configured,
    /// longer markup is cut at the nearest char boundary before parsing.
    pub fn analyze(&self, url: &str, html: &str) -> Verdict {
        let html_bytes = html.len();
        let markup = match self.max_html_bytes {
            Some(cap) => truncate_at_char_boundary(html, cap),
            None => html,
        };
        if markup.len() < html_bytes {
            tracing::warn!(
                url,
                html_bytes,
                kept_bytes = markup.len(),
                "markup exceeds byte cap, truncating before parse"
            );
        }
        let signals = extract_html_signals(markup);
        self.analyze_signals(url, &signals)
    }

    /// Classify a page from pre-parsed signals.
    pub fn analyze_signals(&self, url: &str, signals: &HtmlSignals) -> Verdict {
        let started = Instant::now();
        let page = HostSignals::parse(url);
        let features = FeatureExtractor::extract_parsed(&page, signals);
        tracing::debug!(url, host = %page.host, ?features, "features extracted");

        let verdict = RuleEngine::reason(&features);
        tracing::debug!(
            url,
            label = %verdict.label,
            analyze_time_us = started.elapsed().as_micros() as u64,
            "page analyzed"
        );
        verdict
    }
}

/// Classify a page from raw markup. The whole document is parsed.
pub fn analyze(url: &str, html: &str) -> Verdict {
    Analyzer::default().analyze(url, html)
}

/// Classify a page from pre-parsed signals.
pub fn analyze_signals(url: &str, signals: &HtmlSignals) -> Verdict {
    Analyzer::default().analyze_signals(url, signals)
}

fn truncate_at_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
