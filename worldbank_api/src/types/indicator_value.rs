//! Time-series observation records.

use serde::{Deserialize, Serialize};

use super::indicator::IdAndValue;

/// One observation of an indicator for a country and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub indicator: IdAndValue,
    pub country: IdAndValue,
    pub countryiso3code: String,
    /// Date token of the observation period, e.g. "2019" or "2019Q03".
    pub date: String,
    /// `null` upstream when no observation exists for the period.
    pub value: Option<f64>,
    /// Observed empty in practice; kept in case upstream starts filling it.
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub obs_status: Option<String>,
    pub decimal: i32,
}

/// Observation with the footnote requested via `footnote=y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValueWithFootnote {
    #[serde(flatten)]
    pub value: IndicatorValue,
    pub footnote: String,
}
