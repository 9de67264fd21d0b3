//! Date token parsing for the filter encoder.
//!
//! The API accepts three date grammars: yearly `2018`, monthly `2018M05`,
//! and quarterly `2018Q02`. Range endpoints must share one granularity,
//! so tokens keep their granularity alongside a calendar date used for
//! chronological comparison.

use chrono::NaiveDate;

use crate::Error;

/// Time resolution of a date token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Yearly,
    Monthly,
    Quarterly,
}

/// A parsed date token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateToken {
    pub granularity: Granularity,
    date: NaiveDate,
}

impl DateToken {
    /// Parses a token, trying the yearly, monthly, and quarterly grammars
    /// in that order.
    pub fn parse(s: &str) -> Result<Self, Error> {
        parse_yearly(s)
            .or_else(|| parse_monthly(s))
            .or_else(|| parse_quarterly(s))
            .ok_or_else(|| {
                Error::Validation(format!(
                    "invalid date {s:?}: expected YYYY, YYYYMnn, or YYYYQnn"
                ))
            })
    }

    pub fn starts_after(&self, other: &Self) -> bool {
        self.date > other.date
    }
}

fn parse_year(s: &str) -> Option<i32> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

fn parse_yearly(s: &str) -> Option<DateToken> {
    Some(DateToken {
        granularity: Granularity::Yearly,
        date: NaiveDate::from_ymd_opt(parse_year(s)?, 1, 1)?,
    })
}

/// Splits `2018M05`-style tokens into year and two-digit period number.
fn split_period(s: &str, sep: char) -> Option<(i32, u32)> {
    let (year, period) = s.split_once(sep)?;
    if period.len() != 2 || !period.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((parse_year(year)?, period.parse().ok()?))
}

fn parse_monthly(s: &str) -> Option<DateToken> {
    let (year, month) = split_period(s, 'M')?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(DateToken {
        granularity: Granularity::Monthly,
        date: NaiveDate::from_ymd_opt(year, month, 1)?,
    })
}

fn parse_quarterly(s: &str) -> Option<DateToken> {
    let (year, quarter) = split_period(s, 'Q')?;
    if !(1..=4).contains(&quarter) {
        return None;
    }
    Some(DateToken {
        granularity: Granularity::Quarterly,
        date: NaiveDate::from_ymd_opt(year, (quarter - 1) * 3 + 1, 1)?,
    })
}

#[cfg(test)]
mod tests {
    use super::{DateToken, Granularity};

    #[test]
    fn parses_each_granularity() {
        assert_eq!(
            DateToken::parse("2018").unwrap().granularity,
            Granularity::Yearly
        );
        assert_eq!(
            DateToken::parse("2018M01").unwrap().granularity,
            Granularity::Monthly
        );
        assert_eq!(
            DateToken::parse("2018Q04").unwrap().granularity,
            Granularity::Quarterly
        );
    }

    #[test]
    fn rejects_malformed_tokens() {
        for s in ["", "18", "2018-01", "2018M13", "2018M1", "2018Q05", "2018X01", "20181"] {
            assert!(DateToken::parse(s).is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn orders_tokens_chronologically() {
        let early = DateToken::parse("2018M03").unwrap();
        let late = DateToken::parse("2018M04").unwrap();
        assert!(late.starts_after(&early));
        assert!(!early.starts_after(&late));
        assert!(!early.starts_after(&early));
    }
}
