use anyhow::Result;
use clap::Args;
use worldbank_api::Client;

use crate::output::{print_indicators_csv, print_indicators_table, print_json, OutputFormat};

#[derive(Args)]
pub struct IndicatorsArgs {
    /// Get a single indicator by ID (e.g. SP.POP.TOTL)
    #[arg(long)]
    pub id: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<i64>,
}

pub async fn run(args: &IndicatorsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = &args.id {
        let (_, indicator) = client.get_indicator(id).await?;
        match format {
            OutputFormat::Table => print_indicators_table(&[indicator]),
            OutputFormat::Json => print_json(&indicator),
            OutputFormat::Csv => print_indicators_csv(&[indicator])?,
        }
        return Ok(());
    }

    let pages = super::page_params(args.page, args.per_page);
    let (summary, indicators) = client.list_indicators(pages.as_ref()).await?;

    eprintln!(
        "Page {}/{} ({} total indicators)",
        summary.page, summary.pages, summary.total
    );

    match format {
        OutputFormat::Table => print_indicators_table(&indicators),
        OutputFormat::Json => print_json(&indicators),
        OutputFormat::Csv => print_indicators_csv(&indicators)?,
    }

    Ok(())
}
