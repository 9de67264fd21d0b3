//! Country records returned by the `countries` endpoints.

use serde::{Deserialize, Serialize};

/// Reference to a classification record embedded in a country: the
/// record id, its ISO2 code, and a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRef {
    pub id: String,
    #[serde(default)]
    pub iso2code: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// ISO3 country code, e.g. "JPN".
    pub id: String,
    pub iso2_code: String,
    pub name: String,
    pub region: CodeRef,
    /// Empty ids for countries outside any administrative region.
    #[serde(rename = "adminregion")]
    pub admin_region: CodeRef,
    pub income_level: CodeRef,
    pub lending_type: CodeRef,
    pub capital_city: String,
    pub longitude: String,
    pub latitude: String,
}
