use anyhow::Result;
use clap::Args;
use worldbank_api::Client;

use crate::output::{print_income_levels_csv, print_income_levels_table, print_json, OutputFormat};

#[derive(Args)]
pub struct IncomeLevelsArgs {
    /// Get a single income level by ID (e.g. HIC)
    #[arg(long)]
    pub id: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<i64>,
}

pub async fn run(args: &IncomeLevelsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = &args.id {
        let (_, level) = client.get_income_level(id).await?;
        match format {
            OutputFormat::Table => print_income_levels_table(&[level]),
            OutputFormat::Json => print_json(&level),
            OutputFormat::Csv => print_income_levels_csv(&[level])?,
        }
        return Ok(());
    }

    let pages = super::page_params(args.page, args.per_page);
    let (summary, levels) = client.list_income_levels(pages.as_ref()).await?;

    eprintln!(
        "Page {}/{} ({} total income levels)",
        summary.page, summary.pages, summary.total
    );

    match format {
        OutputFormat::Table => print_income_levels_table(&levels),
        OutputFormat::Json => print_json(&levels),
        OutputFormat::Csv => print_income_levels_csv(&levels)?,
    }

    Ok(())
}
