use serde::{Deserialize, Serialize};

/// World Bank income classification (e.g. "HIC" / "High income").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeLevel {
    pub id: String,
    pub iso2code: String,
    pub value: String,
}
