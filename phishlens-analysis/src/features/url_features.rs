//! Lexical URL features.

use std::sync::LazyLock;

use regex::Regex;

use super::brands::{contains_brand, contains_dotted_tld};

/// Dotted quad of 1-3 digit groups. Octet ranges are not checked.
static IPV4_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:\d{1,3}\.){3}\d{1,3}$").ok());

/// `hasIP`: host is shaped like an IPv4 literal.
pub fn is_ip_host(host: &str) -> bool {
    IPV4_SHAPE.as_ref().is_some_and(|re| re.is_match(host))
}

/// `hasDots`: number of '.' in the host.
pub fn count_dots(host: &str) -> u32 {
    host.matches('.').count() as u32
}

/// `hasSubDomain`: labels beyond the registrable pair, never negative.
pub fn count_subdomains(host: &str) -> u32 {
    if host.is_empty() {
        return 0;
    }
    (host.split('.').count() as u32).saturating_sub(2)
}

/// `hasDslash`: the path contains "//".
pub fn has_double_slash_in_path(path: &str) -> bool {
    path.contains("//")
}

/// `hasTldPath`: the path mentions a common TLD such as ".com".
pub fn has_tld_in_path(path: &str) -> bool {
    contains_dotted_tld(&path.to_lowercase())
}

/// `hasSurl`: host contains anything outside `[a-z0-9.-]`.
pub fn has_symbols_in_domain(host: &str) -> bool {
    host.chars()
        .any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-'))
}

/// `hasSaP`: first host label carries a brand and a hyphen,
/// e.g. `paypal-secure-login.example.tld`.
pub fn domain_prefix_suffix_like_brand(host: &str) -> bool {
    let first = host.split('.').next().unwrap_or_default();
    first.contains('-') && contains_brand(first)
}

/// `hasDIquery`: a brand appears anywhere in host, path or query.
pub fn brand_in_path_or_subdomain(host: &str, path: &str, query: &str) -> bool {
    let text = format!("{host} {path} {query}").to_lowercase();
    contains_brand(&text)
}
