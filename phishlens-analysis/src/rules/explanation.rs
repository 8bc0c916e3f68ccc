//! Natural-language descriptions for axioms and verdict sentences.

use super::types::Axiom;

/// Sentence used when no axiom fired.
pub const LEGITIMATE_EXPLANATION: &str =
    "Verdict: Legitimate, no axiom matched (no significant anomaly under the configured rules)";

const PHISHING_PREFIX: &str = "Verdict: Phishing because ";

/// Human-readable description of one axiom.
pub fn describe(axiom: Axiom) -> &'static str {
    match axiom {
        Axiom::IPurl => "the URL uses an IP address instead of a domain name",
        Axiom::HttpsFalse => "the page is not served over a proper HTTPS connection",
        Axiom::Dslash => "the path contains a nested '//' to mimic a real domain",
        Axiom::TldPath => "a top-level domain (TLD) appears inside the path",
        Axiom::Surl => "the domain contains unusual characters (non-ASCII or symbols)",
        Axiom::SaP => {
            "the domain has a brand-like prefix or suffix (e.g. paypal-secure-login)"
        }
        Axiom::DIquery => "a well-known brand keyword appears in the subdomain or path",
        Axiom::NofDots => "the domain contains an unusually large number of dots",
        Axiom::Subdomain => "the domain has an unusually large number of subdomains",
        Axiom::Rurl => "many resources are loaded from external domains",
        Axiom::Aurl => "the page has abnormal links (e.g. href='#' or javascript:void(0))",
        Axiom::LIdAnchor => "most links point to other domains to borrow credibility",
        Axiom::FAction => "a form submits to an empty, abnormal or cross-domain action",
        Axiom::MetaKeyword => "the meta keywords do not match the domain",
    }
}

/// Verdict sentence for an ordered axiom list.
pub fn explain(axioms: &[Axiom]) -> String {
    if axioms.is_empty() {
        return LEGITIMATE_EXPLANATION.to_string();
    }
    let reasons: Vec<&str> = axioms.iter().copied().map(describe).collect();
    format!("{PHISHING_PREFIX}{}", reasons.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_axiom_has_a_description() {
        for axiom in Axiom::ALL {
            assert!(!describe(axiom).is_empty(), "{axiom} has no description");
        }
    }

    #[test]
    fn joins_descriptions_in_order() {
        let text = explain(&[Axiom::Aurl, Axiom::HttpsFalse]);
        assert_eq!(
            text,
            "Verdict: Phishing because the page has abnormal links (e.g. href='#' or \
             javascript:void(0)); the page is not served over a proper HTTPS connection"
        );
    }

    #[test]
    fn empty_list_is_legitimate_sentence() {
        assert_eq!(explain(&[]), LEGITIMATE_EXPLANATION);
    }
}
