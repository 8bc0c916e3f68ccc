//! Structural HTML features: links, resources, forms and meta keywords.

use phishlens_core::constants::{
    ANCHOR_ELSEWHERE_RATIO_THRESHOLD, MIN_HOSTED_ANCHORS, VOID_FORM_ACTIONS, VOID_LINK_TARGETS,
};

use super::brands::is_brand;
use crate::html::FormSignal;
use crate::url::host_of;

/// Count of hosted URLs and how many of those point away from `base_host`.
/// Empty strings and host-less (relative) references are skipped.
fn hosted_counts<'a>(base_host: &str, urls: impl IntoIterator<Item = &'a str>) -> (usize, usize) {
    let base = base_host.to_lowercase();
    let mut total = 0;
    let mut external = 0;
    for url in urls {
        if url.is_empty() {
            continue;
        }
        let host = host_of(url);
        if host.is_empty() {
            continue;
        }
        total += 1;
        if host != base {
            external += 1;
        }
    }
    (total, external)
}

/// Share of hosted image/script/link sources served from another host.
/// 0.0 when nothing resolves to a host.
pub fn external_resource_ratio<'a>(
    base_host: &str,
    resource_urls: impl IntoIterator<Item = &'a str>,
) -> f64 {
    let (total, external) = hosted_counts(base_host, resource_urls);
    if total == 0 {
        return 0.0;
    }
    external as f64 / total as f64
}

/// `hasAurl`: any anchor is empty or a void/javascript placeholder.
pub fn abnormal_links(hrefs: &[String]) -> bool {
    hrefs
        .iter()
        .any(|href| VOID_LINK_TARGETS.contains(&href.trim().to_lowercase().as_str()))
}

/// `hasFAction`: any form posts nowhere or to another host.
pub fn forms_action_abnormal(forms: &[FormSignal], base_host: &str) -> bool {
    let base = base_host.to_lowercase();
    forms.iter().any(|form| {
        let action = form.action.trim().to_lowercase();
        if VOID_FORM_ACTIONS.contains(&action.as_str()) {
            return true;
        }
        let host = host_of(&action);
        !host.is_empty() && host != base
    })
}

/// `hasLIdAnchor`: at least three hosted anchors, 60% or more of them
/// pointing elsewhere.
pub fn anchors_point_elsewhere(hrefs: &[String], base_host: &str) -> bool {
    let (total, external) = hosted_counts(base_host, hrefs.iter().map(String::as_str));
    if total < MIN_HOSTED_ANCHORS {
        return false;
    }
    external as f64 / total as f64 >= ANCHOR_ELSEWHERE_RATIO_THRESHOLD
}

/// `hasMkeyword`: a meta keyword names a brand other than the page's own
/// first host label.
pub fn meta_keyword_mismatch(meta_content: &str, base_host: &str) -> bool {
    if meta_content.is_empty() {
        return false;
    }
    let primary = base_host.split('.').next().unwrap_or_default();
    meta_content
        .to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|token| !token.is_empty())
        .any(|token| is_brand(token) && token != primary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resource_ratio_is_zero_without_hosted_resources() {
        assert_eq!(external_resource_ratio("example.com", Vec::<&str>::new()), 0.0);
        assert_eq!(
            external_resource_ratio("example.com", ["", "/logo.png", "img/a.gif"]),
            0.0
        );
    }

    #[test]
    fn resource_ratio_compares_hosts_case_insensitively() {
        let ratio = external_resource_ratio(
            "Example.com",
            [
                "https://EXAMPLE.com/a.js",
                "https://cdn.other.net/b.js",
                "/local.css",
            ],
        );
        assert_eq!(ratio, 0.5);
    }

    #[test]
    fn placeholder_links() {
        assert!(abnormal_links(&strings(&["/home", ""])));
        assert!(abnormal_links(&strings(&["  JavaScript:Void(0);  "])));
        assert!(abnormal_links(&strings(&["void(0)"])));
        assert!(!abnormal_links(&strings(&["/home", "https://x.test/"])));
        assert!(!abnormal_links(&[]));
    }

    #[test]
    fn form_actions() {
        assert!(forms_action_abnormal(&[FormSignal::new("post", "")], "example.com"));
        assert!(forms_action_abnormal(&[FormSignal::new("post", " # ")], "example.com"));
        assert!(forms_action_abnormal(
            &[FormSignal::new("post", "https://collector.test/steal")],
            "example.com"
        ));
        assert!(!forms_action_abnormal(&[FormSignal::new("post", "/submit")], "example.com"));
        assert!(!forms_action_abnormal(
            &[FormSignal::new("post", "https://WWW.example.com/submit")],
            "www.example.com"
        ));
        // void(0) is a link placeholder only, and has no host
        assert!(!forms_action_abnormal(&[FormSignal::new("get", "void(0)")], "example.com"));
        assert!(!forms_action_abnormal(&[], "example.com"));
    }

    #[test]
    fn anchors_need_three_hosted_links() {
        let two_external = strings(&["https://a.test/", "https://b.test/", "/local", "#"]);
        assert!(!anchors_point_elsewhere(&two_external, "example.com"));

        let three_of_five = strings(&[
            "https://a.test/",
            "https://b.test/",
            "https://c.test/",
            "https://example.com/1",
            "https://example.com/2",
        ]);
        assert!(anchors_point_elsewhere(&three_of_five, "example.com"));

        let two_of_four = strings(&[
            "https://a.test/",
            "https://b.test/",
            "https://example.com/1",
            "https://example.com/2",
        ]);
        assert!(!anchors_point_elsewhere(&two_of_four, "example.com"));
    }

    #[test]
    fn meta_keywords_against_primary_label() {
        assert!(meta_keyword_mismatch("Facebook, security, login", "facebook-alertt.com"));
        assert!(!meta_keyword_mismatch("facebook, social", "facebook.com"));
        assert!(!meta_keyword_mismatch("example,profile", "www.example.com"));
        assert!(!meta_keyword_mismatch("", "example.com"));
        // tokens are whole alphanumeric runs
        assert!(!meta_keyword_mismatch("paypalish", "example.com"));
        assert!(meta_keyword_mismatch("best-bank-ever", "example.com"));
    }
}
