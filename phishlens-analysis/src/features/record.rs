//! The 14-field feature record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Signals derived from one URL and its markup. Serializes with the
/// established feature names (`hasIP`, `hasHttps`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(rename = "hasIP")]
    pub has_ip: bool,
    #[serde(rename = "hasHttps")]
    pub has_https: bool,
    #[serde(rename = "hasDslash")]
    pub has_dslash: bool,
    #[serde(rename = "hasTldPath")]
    pub has_tld_path: bool,
    #[serde(rename = "hasSurl")]
    pub has_surl: bool,
    #[serde(rename = "hasSaP")]
    pub has_sap: bool,
    #[serde(rename = "hasDIquery")]
    pub has_di_query: bool,
    #[serde(rename = "hasRurl")]
    pub has_rurl: bool,
    #[serde(rename = "hasSubDomain")]
    pub has_sub_domain: u32,
    #[serde(rename = "hasDots")]
    pub has_dots: u32,
    #[serde(rename = "hasAurl")]
    pub has_aurl: bool,
    #[serde(rename = "hasLIdAnchor")]
    pub has_lid_anchor: bool,
    #[serde(rename = "hasFAction")]
    pub has_faction: bool,
    #[serde(rename = "hasMkeyword")]
    pub has_mkeyword: bool,
}

impl FeatureRecord {
    /// Field names and values in declaration order.
    pub fn entries(&self) -> [(&'static str, Value); 14] {
        [
            ("hasIP", Value::Bool(self.has_ip)),
            ("hasHttps", Value::Bool(self.has_https)),
            ("hasDslash", Value::Bool(self.has_dslash)),
            ("hasTldPath", Value::Bool(self.has_tld_path)),
            ("hasSurl", Value::Bool(self.has_surl)),
            ("hasSaP", Value::Bool(self.has_sap)),
            ("hasDIquery", Value::Bool(self.has_di_query)),
            ("hasRurl", Value::Bool(self.has_rurl)),
            ("hasSubDomain", Value::from(self.has_sub_domain)),
            ("hasDots", Value::from(self.has_dots)),
            ("hasAurl", Value::Bool(self.has_aurl)),
            ("hasLIdAnchor", Value::Bool(self.has_lid_anchor)),
            ("hasFAction", Value::Bool(self.has_faction)),
            ("hasMkeyword", Value::Bool(self.has_mkeyword)),
        ]
    }

    /// The record as a name → value map.
    pub fn to_map(&self) -> Map<String, Value> {
        self.entries()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }
}
