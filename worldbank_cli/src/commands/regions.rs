use anyhow::Result;
use clap::Args;
use worldbank_api::Client;

use crate::output::{print_json, print_regions_csv, print_regions_table, OutputFormat};

#[derive(Args)]
pub struct RegionsArgs {
    /// Get a single region by code (e.g. EAS)
    #[arg(long)]
    pub code: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<i64>,
}

pub async fn run(args: &RegionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(code) = &args.code {
        let (_, region) = client.get_region(code).await?;
        match format {
            OutputFormat::Table => print_regions_table(&[region]),
            OutputFormat::Json => print_json(&region),
            OutputFormat::Csv => print_regions_csv(&[region])?,
        }
        return Ok(());
    }

    let pages = super::page_params(args.page, args.per_page);
    let (summary, regions) = client.list_regions(pages.as_ref()).await?;

    eprintln!(
        "Page {}/{} ({} total regions)",
        summary.page, summary.pages, summary.total
    );

    match format {
        OutputFormat::Table => print_regions_table(&regions),
        OutputFormat::Json => print_json(&regions),
        OutputFormat::Csv => print_regions_csv(&regions)?,
    }

    Ok(())
}
