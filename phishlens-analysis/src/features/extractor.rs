//! FeatureExtractor: one `FeatureRecord` per (url, html signals) pair.

use phishlens_core::constants::EXTERNAL_RESOURCE_RATIO_THRESHOLD;

use super::content_features::{
    abnormal_links, anchors_point_elsewhere, external_resource_ratio, forms_action_abnormal,
    meta_keyword_mismatch,
};
use super::record::FeatureRecord;
use super::url_features::{
    brand_in_path_or_subdomain, count_dots, count_subdomains, domain_prefix_suffix_like_brand,
    has_double_slash_in_path, has_symbols_in_domain, has_tld_in_path, is_ip_host,
};
use crate::html::HtmlSignals;
use crate::url::HostSignals;

/// Stateless feature extractor.
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Derive all features. Total: unparsable URLs behave as an empty host
    /// and scheme, missing markup as empty tag lists.
    pub fn extract(url: &str, html: &HtmlSignals) -> FeatureRecord {
        let page = HostSignals::parse(url);
        Self::extract_parsed(&page, html)
    }

    /// Same as [`extract`](Self::extract) for an already split URL.
    pub fn extract_parsed(page: &HostSignals, html: &HtmlSignals) -> FeatureRecord {
        let host = page.host.as_str();
        let resource_ratio = external_resource_ratio(host, html.resource_urls());

        FeatureRecord {
            has_ip: is_ip_host(host),
            has_https: page.scheme == "https",
            has_dslash: has_double_slash_in_path(&page.path),
            has_tld_path: has_tld_in_path(&page.path),
            has_surl: has_symbols_in_domain(host),
            has_sap: domain_prefix_suffix_like_brand(host),
            has_di_query: brand_in_path_or_subdomain(host, &page.path, &page.query),
            has_rurl: resource_ratio > EXTERNAL_RESOURCE_RATIO_THRESHOLD,
            has_sub_domain: count_subdomains(host),
            has_dots: count_dots(host),
            has_aurl: abnormal_links(&html.hrefs),
            has_lid_anchor: anchors_point_elsewhere(&html.hrefs, host),
            has_faction: forms_action_abnormal(&html.forms, host),
            has_mkeyword: meta_keyword_mismatch(&html.meta_keywords, host),
        }
    }
}
