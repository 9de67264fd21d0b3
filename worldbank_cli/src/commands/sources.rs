use anyhow::Result;
use clap::Args;
use worldbank_api::Client;

use crate::output::{print_json, print_sources_csv, print_sources_table, OutputFormat};

#[derive(Args)]
pub struct SourcesArgs {
    /// Get a single source by ID
    #[arg(long)]
    pub id: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<i64>,
}

pub async fn run(args: &SourcesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = &args.id {
        let (_, source) = client.get_source(id).await?;
        match format {
            OutputFormat::Table => print_sources_table(&[source]),
            OutputFormat::Json => print_json(&source),
            OutputFormat::Csv => print_sources_csv(&[source])?,
        }
        return Ok(());
    }

    let pages = super::page_params(args.page, args.per_page);
    let (summary, sources) = client.list_sources(pages.as_ref()).await?;

    eprintln!(
        "Page {}/{} ({} total sources)",
        summary.page, summary.pages, summary.total
    );

    match format {
        OutputFormat::Table => print_sources_table(&sources),
        OutputFormat::Json => print_json(&sources),
        OutputFormat::Csv => print_sources_csv(&sources)?,
    }

    Ok(())
}
