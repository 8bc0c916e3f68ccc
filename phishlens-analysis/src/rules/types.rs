//! Core types for the rules engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::features::FeatureRecord;

/// A named heuristic whose identifier is surfaced in the justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axiom {
    IPurl,
    HttpsFalse,
    Dslash,
    TldPath,
    Surl,
    SaP,
    DIquery,
    NofDots,
    Subdomain,
    /// Never emitted, on purpose. External-resource ratio only affects the
    /// normal-URL check of stage 3; it never appears as an axiom and is not
    /// a weak signal. Kept so the description table covers every feature.
    Rurl,
    Aurl,
    LIdAnchor,
    FAction,
    MetaKeyword,
}

impl Axiom {
    pub const ALL: [Axiom; 14] = [
        Axiom::IPurl,
        Axiom::HttpsFalse,
        Axiom::Dslash,
        Axiom::TldPath,
        Axiom::Surl,
        Axiom::SaP,
        Axiom::DIquery,
        Axiom::NofDots,
        Axiom::Subdomain,
        Axiom::Rurl,
        Axiom::Aurl,
        Axiom::LIdAnchor,
        Axiom::FAction,
        Axiom::MetaKeyword,
    ];

    /// Stable identifier, identical to the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Self::IPurl => "IPurl",
            Self::HttpsFalse => "HttpsFalse",
            Self::Dslash => "Dslash",
            Self::TldPath => "TldPath",
            Self::Surl => "Surl",
            Self::SaP => "SaP",
            Self::DIquery => "DIquery",
            Self::NofDots => "NofDots",
            Self::Subdomain => "Subdomain",
            Self::Rurl => "Rurl",
            Self::Aurl => "Aurl",
            Self::LIdAnchor => "LIdAnchor",
            Self::FAction => "FAction",
            Self::MetaKeyword => "MetaKeyword",
        }
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Classification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Phishing,
    Legitimate,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phishing => "Phishing",
            Self::Legitimate => "Legitimate",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which step of the cascade decided the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStage {
    /// Meta keywords borrow a brand while content or host is suspicious.
    CredibilityLaundering,
    /// Path tricks with a bad form, or an obfuscated host over plain http.
    UrlObfuscation,
    /// Both content and URL look normal.
    Normal,
    /// Weak-signal count decided.
    Fallback,
}

impl fmt::Display for DecisionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CredibilityLaundering => write!(f, "credibility_laundering"),
            Self::UrlObfuscation => write!(f, "url_obfuscation"),
            Self::Normal => write!(f, "normal"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Axiom list; the longest branch appends ten.
pub type AxiomList = SmallVec<[Axiom; 10]>;

/// The outcome of one analysis. Built once by the rules engine and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: Label,
    /// Fired axioms, unique, in cascade order.
    pub justification_axioms: AxiomList,
    pub explanation: String,
    pub features: FeatureRecord,
    pub stage: DecisionStage,
    /// Weak-signal count, set only when the fallback stage decided.
    pub fallback_score: Option<u32>,
}

impl Verdict {
    pub fn is_phishing(&self) -> bool {
        self.label == Label::Phishing
    }

    /// Axiom identifiers as strings, in order.
    pub fn axiom_ids(&self) -> Vec<&'static str> {
        self.justification_axioms.iter().map(Axiom::id).collect()
    }

    /// The feature snapshot as a name → value map, for auditing.
    pub fn features_map(&self) -> Map<String, Value> {
        self.features.to_map()
    }
}
