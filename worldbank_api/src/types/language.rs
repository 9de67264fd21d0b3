use serde::{Deserialize, Serialize};

/// Language the API can localize responses into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    #[serde(rename = "nativeForm")]
    pub native_form: String,
}
