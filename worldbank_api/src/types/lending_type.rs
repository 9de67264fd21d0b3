use serde::{Deserialize, Serialize};

/// Lending classification (e.g. "IBD" / "IBRD").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingType {
    pub id: String,
    pub iso2code: String,
    pub value: String,
}
