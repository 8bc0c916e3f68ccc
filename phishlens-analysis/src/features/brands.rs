//! Keyword matchers over the compiled-in brand and TLD tables.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use phishlens_core::constants::{BRAND_KEYWORDS, COMMON_TLDS};

static BRAND_MATCHER: LazyLock<Option<AhoCorasick>> =
    LazyLock::new(|| AhoCorasick::new(BRAND_KEYWORDS).ok());

/// `.com`, `.net`, ... for path scanning.
static DOTTED_TLDS: LazyLock<Vec<String>> =
    LazyLock::new(|| COMMON_TLDS.iter().map(|tld| format!(".{tld}")).collect());

static DOTTED_TLD_MATCHER: LazyLock<Option<AhoCorasick>> =
    LazyLock::new(|| AhoCorasick::new(DOTTED_TLDS.iter()).ok());

/// True if any brand keyword occurs as a substring of `text`.
/// Callers lowercase `text` first.
pub fn contains_brand(text: &str) -> bool {
    match BRAND_MATCHER.as_ref() {
        Some(matcher) => matcher.is_match(text),
        None => BRAND_KEYWORDS.iter().any(|b| text.contains(b)),
    }
}

/// True if `token` is exactly a brand keyword.
pub fn is_brand(token: &str) -> bool {
    BRAND_KEYWORDS.contains(&token)
}

/// True if `text` contains a dot followed by a common TLD.
pub fn contains_dotted_tld(text: &str) -> bool {
    match DOTTED_TLD_MATCHER.as_ref() {
        Some(matcher) => matcher.is_match(text),
        None => DOTTED_TLDS.iter().any(|t| text.contains(t.as_str())),
    }
}
