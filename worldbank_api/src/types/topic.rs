use serde::{Deserialize, Serialize};

/// High-level subject grouping for indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub value: String,
    #[serde(rename = "sourceNote")]
    pub source_note: String,
}
