use serde::{Deserialize, Serialize};

/// Geographic or administrative region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    #[serde(default)]
    pub id: String,
    pub code: String,
    pub iso2code: String,
    pub name: String,
}
