//! Pagination summaries carried in the first element of the response
//! envelope.
//!
//! The API renders the counters as JSON numbers on some endpoints and as
//! numeric strings on others, so every counter decodes permissively.

use serde::{Deserialize, Deserializer, Serialize};

/// Page window reported alongside a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    #[serde(deserialize_with = "int_or_string")]
    pub page: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub pages: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub per_page: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub total: i64,
}

/// Page summary for indicator value responses, which also carry the
/// data source the observations came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummaryWithSource {
    #[serde(deserialize_with = "int_or_string")]
    pub page: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub pages: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub per_page: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub total: i64,
    #[serde(rename = "sourceid")]
    pub source_id: String,
}

/// Page summary for source-scoped indicator value responses, which add
/// the source's last-updated date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummaryWithLastUpdated {
    #[serde(deserialize_with = "int_or_string")]
    pub page: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub pages: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub per_page: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub total: i64,
    #[serde(rename = "sourceid")]
    pub source_id: String,
    #[serde(rename = "lastupdated")]
    pub last_updated: String,
}

/// Decodes an integer from either a JSON number or a numeric string.
fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct IntOrString;

    impl<'de> Visitor<'de> for IntOrString {
        type Value = i64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "an integer or a numeric string")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(v).map_err(E::custom)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.parse::<i64>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(IntOrString)
}

#[cfg(test)]
mod tests {
    use super::PageSummary;

    #[test]
    fn counters_decode_from_numbers_and_strings() {
        let summary: PageSummary =
            serde_json::from_str(r#"{"page":1,"pages":7,"per_page":"50","total":"304"}"#).unwrap();
        assert_eq!(summary.page, 1);
        assert_eq!(summary.pages, 7);
        assert_eq!(summary.per_page, 50);
        assert_eq!(summary.total, 304);
    }

    #[test]
    fn non_numeric_string_is_rejected() {
        let result =
            serde_json::from_str::<PageSummary>(r#"{"page":1,"pages":1,"per_page":"many","total":1}"#);
        assert!(result.is_err());
    }
}
