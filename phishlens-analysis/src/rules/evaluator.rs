//! Rules evaluator: the ordered decision cascade.
//!
//! Stages are tried in order and the first that matches decides:
//! 1. credibility laundering (meta-keyword brand plus suspicious content)
//! 2. URL obfuscation (path tricks with a bad form, or odd host over http)
//! 3. normalcy check
//! 4. weak-signal fallback score
//!
//! Within a stage, axioms are appended in a fixed order. That order is part
//! of the output contract.

use phishlens_core::constants::{DOTS_THRESHOLD, FALLBACK_MIN_SCORE, SUBDOMAIN_THRESHOLD};
use rustc_hash::FxHashSet;

use super::explanation::explain;
use super::types::{Axiom, AxiomList, DecisionStage, Label, Verdict};
use crate::features::FeatureRecord;

/// Stateless rules engine.
pub struct RuleEngine;

impl RuleEngine {
    /// Classify one feature record. Pure and total.
    pub fn reason(features: &FeatureRecord) -> Verdict {
        let (label, stage, fallback_score, axioms) = Self::cascade(features);
        let justification_axioms = dedupe(axioms);
        let explanation = explain(&justification_axioms);

        tracing::debug!(
            label = %label,
            decision_stage = %stage,
            axiom_count = justification_axioms.len(),
            "rules evaluated"
        );

        Verdict {
            label,
            justification_axioms,
            explanation,
            features: *features,
            stage,
            fallback_score,
        }
    }

    fn cascade(f: &FeatureRecord) -> (Label, DecisionStage, Option<u32>, AxiomList) {
        if let Some(axioms) = credibility_laundering(f) {
            return (Label::Phishing, DecisionStage::CredibilityLaundering, None, axioms);
        }
        if let Some(axioms) = url_obfuscation(f) {
            return (Label::Phishing, DecisionStage::UrlObfuscation, None, axioms);
        }
        if normal_content(f) && normal_url(f) {
            return (Label::Legitimate, DecisionStage::Normal, None, AxiomList::new());
        }

        let signals = weak_signals(f);
        let score = signals.iter().filter(|(fired, _)| *fired).count() as u32;
        if score >= FALLBACK_MIN_SCORE {
            let axioms = signals
                .iter()
                .filter(|(fired, _)| *fired)
                .map(|(_, axiom)| *axiom)
                .collect();
            (Label::Phishing, DecisionStage::Fallback, Some(score), axioms)
        } else {
            (Label::Legitimate, DecisionStage::Fallback, Some(score), AxiomList::new())
        }
    }
}

/// Free-function form of [`RuleEngine::reason`].
pub fn reason(features: &FeatureRecord) -> Verdict {
    RuleEngine::reason(features)
}

fn many_dots(f: &FeatureRecord) -> bool {
    f.has_dots >= DOTS_THRESHOLD
}

fn many_subdomains(f: &FeatureRecord) -> bool {
    f.has_sub_domain >= SUBDOMAIN_THRESHOLD
}

fn push_if(axioms: &mut AxiomList, fired: bool, axiom: Axiom) {
    if fired {
        axioms.push(axiom);
    }
}

/// Stage 1: `hasMkeyword ∧ (hasAurl ∨ hasFAction ∨ hasLIdAnchor ∨ hasIP) ∧ ¬hasHttps`.
fn credibility_laundering(f: &FeatureRecord) -> Option<AxiomList> {
    let suspicious_content = f.has_aurl || f.has_faction || f.has_lid_anchor || f.has_ip;
    if !(f.has_mkeyword && suspicious_content && !f.has_https) {
        return None;
    }

    let mut axioms = AxiomList::new();
    push_if(&mut axioms, f.has_ip, Axiom::IPurl);
    push_if(&mut axioms, f.has_aurl, Axiom::Aurl);
    push_if(&mut axioms, f.has_faction, Axiom::FAction);
    push_if(&mut axioms, f.has_lid_anchor, Axiom::LIdAnchor);
    axioms.push(Axiom::MetaKeyword);
    axioms.push(Axiom::HttpsFalse);
    Some(axioms)
}

/// Stage 2: path tricks with an abnormal form, or an obfuscated host
/// without https.
fn url_obfuscation(f: &FeatureRecord) -> Option<AxiomList> {
    let path_trick_with_form = (f.has_dslash || f.has_tld_path) && f.has_faction;
    let obfuscated_host = (f.has_ip
        || f.has_surl
        || f.has_di_query
        || many_dots(f)
        || f.has_sap
        || many_subdomains(f))
        && !f.has_https;
    if !(path_trick_with_form || obfuscated_host) {
        return None;
    }

    let mut axioms = AxiomList::new();
    push_if(&mut axioms, f.has_dslash, Axiom::Dslash);
    push_if(&mut axioms, f.has_tld_path, Axiom::TldPath);
    push_if(&mut axioms, f.has_faction, Axiom::FAction);
    push_if(&mut axioms, f.has_ip, Axiom::IPurl);
    push_if(&mut axioms, f.has_surl, Axiom::Surl);
    push_if(&mut axioms, f.has_di_query, Axiom::DIquery);
    push_if(&mut axioms, many_dots(f), Axiom::NofDots);
    push_if(&mut axioms, f.has_sap, Axiom::SaP);
    push_if(&mut axioms, many_subdomains(f), Axiom::Subdomain);
    // Appended even when only the path/form clause matched on an https page.
    axioms.push(Axiom::HttpsFalse);
    Some(axioms)
}

fn normal_content(f: &FeatureRecord) -> bool {
    !f.has_faction && !f.has_aurl && !f.has_lid_anchor && !f.has_mkeyword
}

/// `hasRurl` only matters here.
fn normal_url(f: &FeatureRecord) -> bool {
    f.has_https
        || (!many_dots(f)
            && !f.has_dslash
            && !f.has_sap
            && !many_subdomains(f)
            && !f.has_surl
            && !f.has_di_query
            && !f.has_ip
            && !f.has_rurl
            && !f.has_tld_path)
}

/// Stage 4 inputs, in append order.
fn weak_signals(f: &FeatureRecord) -> [(bool, Axiom); 8] {
    [
        (f.has_ip, Axiom::IPurl),
        (!f.has_https, Axiom::HttpsFalse),
        (f.has_faction, Axiom::FAction),
        (f.has_sap, Axiom::SaP),
        (many_subdomains(f), Axiom::Subdomain),
        (f.has_di_query, Axiom::DIquery),
        (f.has_aurl, Axiom::Aurl),
        (f.has_tld_path, Axiom::TldPath),
    ]
}

/// Drop repeats, keeping the first occurrence.
fn dedupe(axioms: AxiomList) -> AxiomList {
    let mut seen = FxHashSet::default();
    axioms.into_iter().filter(|a| seen.insert(*a)).collect()
}
