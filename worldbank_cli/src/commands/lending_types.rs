use anyhow::Result;
use clap::Args;
use worldbank_api::Client;

use crate::output::{print_json, print_lending_types_csv, print_lending_types_table, OutputFormat};

#[derive(Args)]
pub struct LendingTypesArgs {
    /// Get a single lending type by ID (e.g. IBD)
    #[arg(long)]
    pub id: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<i64>,
}

pub async fn run(args: &LendingTypesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = &args.id {
        let (_, lending_type) = client.get_lending_type(id).await?;
        match format {
            OutputFormat::Table => print_lending_types_table(&[lending_type]),
            OutputFormat::Json => print_json(&lending_type),
            OutputFormat::Csv => print_lending_types_csv(&[lending_type])?,
        }
        return Ok(());
    }

    let pages = super::page_params(args.page, args.per_page);
    let (summary, types) = client.list_lending_types(pages.as_ref()).await?;

    eprintln!(
        "Page {}/{} ({} total lending types)",
        summary.page, summary.pages, summary.total
    );

    match format {
        OutputFormat::Table => print_lending_types_table(&types),
        OutputFormat::Json => print_json(&types),
        OutputFormat::Csv => print_lending_types_csv(&types)?,
    }

    Ok(())
}
