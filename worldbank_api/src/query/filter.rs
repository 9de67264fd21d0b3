//! Time filters for indicator value queries, plus the country list filter.

use std::fmt;

use url::Url;

use super::date::{DateToken, Granularity};
use crate::Error;

/// Observation frequency for most-recent-value queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Monthly,
    Quarterly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Frequency::Monthly => "M",
                Frequency::Quarterly => "Q",
                Frequency::Yearly => "Y",
            }
        )
    }
}

/// Selects the latest observations per series instead of a date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostRecentValues {
    pub frequency: Frequency,
    /// Number of most recent observations per series. Must be positive.
    pub count: u32,
    /// Skip empty observations (`mrnev` instead of `mrv`). Mutually
    /// exclusive with `gap_fill`.
    pub non_empty: bool,
    /// Back-fill gaps with the latest available value (`gapfill=Y`).
    pub gap_fill: bool,
}

impl MostRecentValues {
    fn add_to_url(&self, url: &mut Url) -> Result<(), Error> {
        if self.count == 0 {
            return Err(Error::Validation(
                "most recent value count must be greater than 0".into(),
            ));
        }
        if self.non_empty && self.gap_fill {
            return Err(Error::Validation(
                "non_empty and gap_fill are mutually exclusive".into(),
            ));
        }
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("frequency", &self.frequency.to_string());
        if self.non_empty {
            pairs.append_pair("mrnev", &self.count.to_string());
        } else {
            pairs.append_pair("mrv", &self.count.to_string());
        }
        if self.gap_fill {
            pairs.append_pair("gapfill", "Y");
        }
        Ok(())
    }
}

/// Time filter for indicator value endpoints.
///
/// Date tokens are yearly (`2018`), monthly (`2018M05`), or quarterly
/// (`2018Q02`). Absent filters are expressed as `None` at the accessor
/// and add nothing to the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Observations at one exact date.
    Date(String),
    /// Inclusive range. Both endpoints must parse with the same
    /// granularity, and start must not be after end.
    DateRange { start: String, end: String },
    /// Year-to-date window; takes a bare 4-digit year only.
    YearToDate(String),
    /// Latest N observations per series.
    MostRecent(MostRecentValues),
}

impl Filter {
    /// Validates the filter and appends its query parameters, preserving
    /// parameters already present. Nothing is appended on failure.
    pub fn add_to_url(&self, url: &mut Url) -> Result<(), Error> {
        match self {
            Filter::Date(date) => {
                if date.is_empty() {
                    return Err(Error::Validation("date must not be empty".into()));
                }
                DateToken::parse(date)?;
                url.query_pairs_mut().append_pair("date", date);
            }
            Filter::DateRange { start, end } => {
                let start_token = DateToken::parse(start)?;
                let end_token = DateToken::parse(end)?;
                if start_token.granularity != end_token.granularity {
                    return Err(Error::Validation(format!(
                        "date range {start}:{end} mixes granularities"
                    )));
                }
                if start_token.starts_after(&end_token) {
                    return Err(Error::Validation(format!(
                        "date range start {start} is after end {end}"
                    )));
                }
                url.query_pairs_mut()
                    .append_pair("date", &format!("{start}:{end}"));
            }
            Filter::YearToDate(year) => {
                if year.is_empty() {
                    return Err(Error::Validation("date must not be empty".into()));
                }
                let token = DateToken::parse(year)?;
                if token.granularity != Granularity::Yearly {
                    return Err(Error::Validation(format!(
                        "year-to-date takes a bare year, got {year:?}"
                    )));
                }
                url.query_pairs_mut()
                    .append_pair("date", &format!("YTD:{year}"));
            }
            Filter::MostRecent(recent) => recent.add_to_url(url)?,
        }
        Ok(())
    }
}

/// Narrows the country list by classification. All fields are optional
/// and combine freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryFilter {
    pub region_id: Option<String>,
    pub income_level_id: Option<String>,
    pub lending_type_id: Option<String>,
}

impl CountryFilter {
    pub fn with_region(mut self, region_id: &str) -> Self {
        self.region_id = Some(region_id.to_string());
        self
    }

    pub fn with_income_level(mut self, income_level_id: &str) -> Self {
        self.income_level_id = Some(income_level_id.to_string());
        self
    }

    pub fn with_lending_type(mut self, lending_type_id: &str) -> Self {
        self.lending_type_id = Some(lending_type_id.to_string());
        self
    }

    pub fn add_to_url(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        if let Some(region) = &self.region_id {
            pairs.append_pair("region", region);
        }
        if let Some(level) = &self.income_level_id {
            pairs.append_pair("incomelevel", level);
        }
        if let Some(lending) = &self.lending_type_id {
            pairs.append_pair("lendingtype", lending);
        }
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{CountryFilter, Filter, Frequency, MostRecentValues};
    use crate::Error;

    fn base() -> Url {
        Url::parse("https://example.org/v2/countries/all/indicators/SP.POP.TOTL?format=json")
            .unwrap()
    }

    fn query_of(filter: &Filter) -> String {
        let mut url = base();
        filter.add_to_url(&mut url).unwrap();
        url.query().unwrap().to_string()
    }

    fn expect_validation(filter: &Filter) -> String {
        let mut url = base();
        match filter.add_to_url(&mut url).unwrap_err() {
            Error::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn exact_date_accepts_each_granularity() {
        assert_eq!(
            query_of(&Filter::Date("2018".into())),
            "format=json&date=2018"
        );
        assert_eq!(
            query_of(&Filter::Date("2018M01".into())),
            "format=json&date=2018M01"
        );
        assert_eq!(
            query_of(&Filter::Date("2018Q01".into())),
            "format=json&date=2018Q01"
        );
    }

    #[test]
    fn exact_date_rejects_empty_and_malformed() {
        expect_validation(&Filter::Date(String::new()));
        expect_validation(&Filter::Date("2018-01".into()));
    }

    #[test]
    fn range_encodes_colon() {
        assert_eq!(
            query_of(&Filter::DateRange {
                start: "2018".into(),
                end: "2019".into(),
            }),
            "format=json&date=2018%3A2019"
        );
        assert_eq!(
            query_of(&Filter::DateRange {
                start: "2018M01".into(),
                end: "2019M01".into(),
            }),
            "format=json&date=2018M01%3A2019M01"
        );
    }

    #[test]
    fn range_rejects_mixed_granularities() {
        let msg = expect_validation(&Filter::DateRange {
            start: "2018M01".into(),
            end: "2019Q01".into(),
        });
        assert!(msg.contains("granularit"), "message: {msg}");
        expect_validation(&Filter::DateRange {
            start: "2018".into(),
            end: "2019Q01".into(),
        });
    }

    #[test]
    fn range_rejects_start_after_end() {
        expect_validation(&Filter::DateRange {
            start: "2019".into(),
            end: "2018".into(),
        });
        expect_validation(&Filter::DateRange {
            start: "2018Q04".into(),
            end: "2018Q01".into(),
        });
    }

    #[test]
    fn range_accepts_equal_endpoints() {
        assert_eq!(
            query_of(&Filter::DateRange {
                start: "2018".into(),
                end: "2018".into(),
            }),
            "format=json&date=2018%3A2018"
        );
    }

    #[test]
    fn year_to_date_takes_bare_year_only() {
        assert_eq!(
            query_of(&Filter::YearToDate("2018".into())),
            "format=json&date=YTD%3A2018"
        );
        expect_validation(&Filter::YearToDate("2018M01".into()));
        expect_validation(&Filter::YearToDate("2018Q01".into()));
        expect_validation(&Filter::YearToDate(String::new()));
    }

    #[test]
    fn most_recent_encodes_frequency_and_count() {
        let filter = Filter::MostRecent(MostRecentValues {
            frequency: Frequency::Yearly,
            count: 1,
            non_empty: false,
            gap_fill: false,
        });
        assert_eq!(query_of(&filter), "format=json&frequency=Y&mrv=1");

        let filter = Filter::MostRecent(MostRecentValues {
            frequency: Frequency::Monthly,
            count: 5,
            non_empty: true,
            gap_fill: false,
        });
        assert_eq!(query_of(&filter), "format=json&frequency=M&mrnev=5");

        let filter = Filter::MostRecent(MostRecentValues {
            frequency: Frequency::Quarterly,
            count: 1,
            non_empty: false,
            gap_fill: true,
        });
        assert_eq!(query_of(&filter), "format=json&frequency=Q&mrv=1&gapfill=Y");
    }

    #[test]
    fn most_recent_rejects_zero_count() {
        expect_validation(&Filter::MostRecent(MostRecentValues {
            frequency: Frequency::Yearly,
            count: 0,
            non_empty: false,
            gap_fill: false,
        }));
    }

    #[test]
    fn most_recent_rejects_non_empty_with_gap_fill() {
        let msg = expect_validation(&Filter::MostRecent(MostRecentValues {
            frequency: Frequency::Yearly,
            count: 1,
            non_empty: true,
            gap_fill: true,
        }));
        assert!(msg.contains("mutually exclusive"), "message: {msg}");
    }

    #[test]
    fn most_recent_accepts_exactly_one_modifier() {
        for (non_empty, gap_fill) in [(true, false), (false, true), (false, false)] {
            let mut url = base();
            Filter::MostRecent(MostRecentValues {
                frequency: Frequency::Yearly,
                count: 2,
                non_empty,
                gap_fill,
            })
            .add_to_url(&mut url)
            .unwrap();
        }
    }

    #[test]
    fn country_filter_appends_classification_params() {
        let mut url = Url::parse("https://example.org/v2/countries?format=json").unwrap();
        CountryFilter::default()
            .with_region("EAS")
            .with_income_level("HIC")
            .with_lending_type("LNX")
            .add_to_url(&mut url);
        assert_eq!(
            url.query().unwrap(),
            "format=json&region=EAS&incomelevel=HIC&lendingtype=LNX"
        );
    }

    #[test]
    fn empty_country_filter_is_a_no_op() {
        let mut url = Url::parse("https://example.org/v2/countries?format=json").unwrap();
        CountryFilter::default().add_to_url(&mut url);
        assert_eq!(url.query().unwrap(), "format=json");
    }
}
