//! Indicator metadata records.

use serde::{Deserialize, Serialize};

/// Small id + label pair embedded in indicator and observation records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAndValue {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    /// Indicator code, e.g. "SP.POP.TOTL".
    pub id: String,
    pub name: String,
    /// Observed empty in practice; kept in case upstream starts filling it.
    #[serde(default)]
    pub unit: Option<String>,
    pub source: IdAndValue,
    pub source_note: String,
    pub source_organization: String,
    pub topics: Vec<IdAndValue>,
}
