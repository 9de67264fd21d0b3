use anyhow::{bail, Result};
use clap::Args;
use worldbank_api::{Client, Filter, Frequency, MostRecentValues};

use crate::output::{
    print_footnote_values_csv, print_footnote_values_table, print_json, print_values_csv,
    print_values_table, OutputFormat,
};

#[derive(Args)]
pub struct ValuesArgs {
    /// Indicator ID (e.g. SP.POP.TOTL). Repeat to fetch several at once,
    /// which also requires --source
    #[arg(long = "indicator", required = true)]
    pub indicators: Vec<String>,

    /// Country code to scope by (e.g. JPN). Repeatable; all countries
    /// when omitted
    #[arg(long = "country")]
    pub countries: Vec<String>,

    /// Data source ID (e.g. 2 for World Development Indicators)
    #[arg(long)]
    pub source: Option<String>,

    /// Request per-observation footnotes
    #[arg(long)]
    pub footnote: bool,

    /// Exact date: 2018, 2018M05, or 2018Q02
    #[arg(long)]
    pub date: Option<String>,

    /// Range start; requires --end and matching granularity
    #[arg(long, requires = "end")]
    pub start: Option<String>,

    /// Range end
    #[arg(long, requires = "start")]
    pub end: Option<String>,

    /// Year-to-date window from a bare year
    #[arg(long)]
    pub ytd: Option<String>,

    /// Latest N observations per series
    #[arg(long)]
    pub mrv: Option<u32>,

    /// Observation frequency for --mrv: m, q, or y. Defaults to yearly
    #[arg(long)]
    pub frequency: Option<String>,

    /// With --mrv, skip empty observations
    #[arg(long)]
    pub non_empty: bool,

    /// With --mrv, back-fill gaps with the latest available value
    #[arg(long)]
    pub gapfill: bool,

    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<i64>,
}

fn parse_frequency(s: &str) -> Result<Frequency> {
    match s.to_ascii_lowercase().as_str() {
        "m" | "monthly" => Ok(Frequency::Monthly),
        "q" | "quarterly" => Ok(Frequency::Quarterly),
        "y" | "yearly" => Ok(Frequency::Yearly),
        other => bail!("unknown frequency {other:?}: expected m, q, or y"),
    }
}

fn build_filter(args: &ValuesArgs) -> Result<Option<Filter>> {
    let mut filters = Vec::new();
    if let Some(date) = &args.date {
        filters.push(Filter::Date(date.clone()));
    }
    if let (Some(start), Some(end)) = (&args.start, &args.end) {
        filters.push(Filter::DateRange {
            start: start.clone(),
            end: end.clone(),
        });
    }
    if let Some(year) = &args.ytd {
        filters.push(Filter::YearToDate(year.clone()));
    }
    if let Some(count) = args.mrv {
        let frequency = parse_frequency(args.frequency.as_deref().unwrap_or("y"))?;
        filters.push(Filter::MostRecent(MostRecentValues {
            frequency,
            count,
            non_empty: args.non_empty,
            gap_fill: args.gapfill,
        }));
    }

    if filters.len() > 1 {
        bail!("--date, --start/--end, --ytd, and --mrv are mutually exclusive");
    }
    Ok(filters.pop())
}

pub async fn run(args: &ValuesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if args.indicators.len() > 1 && args.source.is_none() {
        bail!("fetching multiple indicators at once requires --source");
    }

    let filter = build_filter(args)?;
    let pages = super::page_params(args.page, args.per_page);

    match (&args.source, args.footnote) {
        (None, false) => {
            let (summary, values) = if args.countries.is_empty() {
                client
                    .list_indicator_values(&args.indicators[0], filter.as_ref(), pages.as_ref())
                    .await?
            } else {
                client
                    .list_indicator_values_by_countries(
                        &args.countries,
                        &args.indicators[0],
                        filter.as_ref(),
                        pages.as_ref(),
                    )
                    .await?
            };
            eprintln!(
                "Page {}/{} ({} total observations)",
                summary.page, summary.pages, summary.total
            );
            match format {
                OutputFormat::Table => print_values_table(&values),
                OutputFormat::Json => print_json(&values),
                OutputFormat::Csv => print_values_csv(&values)?,
            }
        }
        (None, true) => {
            let (summary, values) = if args.countries.is_empty() {
                client
                    .list_indicator_values_with_footnote(
                        &args.indicators[0],
                        filter.as_ref(),
                        pages.as_ref(),
                    )
                    .await?
            } else {
                client
                    .list_indicator_values_by_countries_with_footnote(
                        &args.countries,
                        &args.indicators[0],
                        filter.as_ref(),
                        pages.as_ref(),
                    )
                    .await?
            };
            eprintln!(
                "Page {}/{} ({} total observations)",
                summary.page, summary.pages, summary.total
            );
            match format {
                OutputFormat::Table => print_footnote_values_table(&values),
                OutputFormat::Json => print_json(&values),
                OutputFormat::Csv => print_footnote_values_csv(&values)?,
            }
        }
        (Some(source), false) => {
            let (summary, values) = if args.countries.is_empty() {
                client
                    .list_indicator_values_by_source(
                        &args.indicators,
                        source,
                        filter.as_ref(),
                        pages.as_ref(),
                    )
                    .await?
            } else {
                client
                    .list_indicator_values_by_countries_and_source(
                        &args.countries,
                        &args.indicators,
                        source,
                        filter.as_ref(),
                        pages.as_ref(),
                    )
                    .await?
            };
            eprintln!(
                "Page {}/{} ({} total observations, source updated {})",
                summary.page, summary.pages, summary.total, summary.last_updated
            );
            match format {
                OutputFormat::Table => print_values_table(&values),
                OutputFormat::Json => print_json(&values),
                OutputFormat::Csv => print_values_csv(&values)?,
            }
        }
        (Some(source), true) => {
            let (summary, values) = if args.countries.is_empty() {
                client
                    .list_indicator_values_by_source_with_footnote(
                        &args.indicators,
                        source,
                        filter.as_ref(),
                        pages.as_ref(),
                    )
                    .await?
            } else {
                client
                    .list_indicator_values_by_countries_and_source_with_footnote(
                        &args.countries,
                        &args.indicators,
                        source,
                        filter.as_ref(),
                        pages.as_ref(),
                    )
                    .await?
            };
            eprintln!(
                "Page {}/{} ({} total observations, source updated {})",
                summary.page, summary.pages, summary.total, summary.last_updated
            );
            match format {
                OutputFormat::Table => print_footnote_values_table(&values),
                OutputFormat::Json => print_json(&values),
                OutputFormat::Csv => print_footnote_values_csv(&values)?,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use worldbank_api::Filter;

    use super::{build_filter, ValuesArgs};

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: ValuesArgs,
    }

    fn parse(argv: &[&str]) -> ValuesArgs {
        let mut full = vec!["values"];
        full.extend_from_slice(argv);
        Harness::parse_from(full).args
    }

    #[test]
    fn no_filter_flags_yield_no_filter() {
        let args = parse(&["--indicator", "SP.POP.TOTL"]);
        assert_eq!(build_filter(&args).unwrap(), None);
    }

    #[test]
    fn date_range_flags_build_a_range_filter() {
        let args = parse(&[
            "--indicator",
            "SP.POP.TOTL",
            "--start",
            "2018",
            "--end",
            "2019",
        ]);
        assert_eq!(
            build_filter(&args).unwrap(),
            Some(Filter::DateRange {
                start: "2018".into(),
                end: "2019".into(),
            })
        );
    }

    #[test]
    fn combining_filter_flags_is_rejected() {
        let args = parse(&[
            "--indicator",
            "SP.POP.TOTL",
            "--date",
            "2018",
            "--ytd",
            "2019",
        ]);
        assert!(build_filter(&args).is_err());
    }

    #[test]
    fn mrv_defaults_to_yearly_frequency() {
        let mut args = parse(&["--indicator", "SP.POP.TOTL"]);
        args.mrv = Some(3);
        let filter = build_filter(&args).unwrap().unwrap();
        match filter {
            Filter::MostRecent(recent) => {
                assert_eq!(recent.count, 3);
                assert_eq!(recent.frequency, worldbank_api::Frequency::Yearly);
            }
            other => panic!("expected most-recent filter, got {other:?}"),
        }
    }
}
