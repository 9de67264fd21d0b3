use anyhow::Result;
use clap::Args;
use worldbank_api::{Client, CountryFilter};

use crate::output::{print_countries_csv, print_countries_table, print_json, OutputFormat};

#[derive(Args)]
pub struct CountriesArgs {
    /// Get a single country by ISO2/ISO3 code
    #[arg(long)]
    pub id: Option<String>,

    /// Filter by region code (e.g. EAS, ECS)
    #[arg(long)]
    pub region: Option<String>,

    /// Filter by income level (e.g. HIC, LIC)
    #[arg(long)]
    pub income_level: Option<String>,

    /// Filter by lending type (e.g. IBD, IDX)
    #[arg(long)]
    pub lending_type: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<i64>,
}

pub async fn run(args: &CountriesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = &args.id {
        let (_, country) = client.get_country(id).await?;
        match format {
            OutputFormat::Table => print_countries_table(&[country]),
            OutputFormat::Json => print_json(&country),
            OutputFormat::Csv => print_countries_csv(&[country])?,
        }
        return Ok(());
    }

    let mut filter = CountryFilter::default();
    if let Some(region) = &args.region {
        filter = filter.with_region(region);
    }
    if let Some(level) = &args.income_level {
        filter = filter.with_income_level(level);
    }
    if let Some(lending) = &args.lending_type {
        filter = filter.with_lending_type(lending);
    }

    let pages = super::page_params(args.page, args.per_page);
    let (summary, countries) = client.list_countries(Some(&filter), pages.as_ref()).await?;

    eprintln!(
        "Page {}/{} ({} total countries)",
        summary.page, summary.pages, summary.total
    );

    match format {
        OutputFormat::Table => print_countries_table(&countries),
        OutputFormat::Json => print_json(&countries),
        OutputFormat::Csv => print_countries_csv(&countries)?,
    }

    Ok(())
}
