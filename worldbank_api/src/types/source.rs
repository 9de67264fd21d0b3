use serde::{Deserialize, Serialize};

/// A data source (database) indicators are published under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    #[serde(rename = "lastupdated")]
    pub last_updated: String,
    pub name: String,
    pub code: String,
    /// Observed empty in practice; kept in case upstream starts filling it.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "dataavailability")]
    pub data_availability: String,
    #[serde(rename = "metadataavailability")]
    pub metadata_availability: String,
    pub concepts: String,
}
