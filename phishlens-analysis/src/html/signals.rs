//! Parsed HTML signals.

use serde::{Deserialize, Serialize};

/// One `<form>`: its method (lowercased) and raw action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSignal {
    pub method: String,
    pub action: String,
}

impl FormSignal {
    pub fn new(method: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            action: action.into(),
        }
    }
}

/// Tag attributes pulled from one HTML document, in document order.
///
/// Missing attributes are stored as empty strings, never dropped, so every
/// element stays visible to the ratio and placeholder checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlSignals {
    /// `href` of every `<a>`.
    pub hrefs: Vec<String>,
    /// `src` of every `<img>`.
    pub imgs: Vec<String>,
    /// `src` of every `<script>`, inline scripts included as "".
    pub scripts: Vec<String>,
    /// `href` of every `<link>`.
    pub links_tag: Vec<String>,
    pub forms: Vec<FormSignal>,
    /// `content` of the keywords `<meta>`, or "".
    pub meta_keywords: String,
}

impl HtmlSignals {
    /// Image, script and link-tag sources chained in that order.
    pub fn resource_urls(&self) -> impl Iterator<Item = &str> {
        self.imgs
            .iter()
            .chain(&self.scripts)
            .chain(&self.links_tag)
            .map(String::as_str)
    }
}
