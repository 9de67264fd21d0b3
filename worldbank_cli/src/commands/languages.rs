use anyhow::Result;
use clap::Args;
use worldbank_api::Client;

use crate::output::{print_json, print_languages_csv, print_languages_table, OutputFormat};

#[derive(Args)]
pub struct LanguagesArgs {
    /// Get a single language by code (e.g. es)
    #[arg(long)]
    pub code: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<i64>,
}

pub async fn run(args: &LanguagesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(code) = &args.code {
        let (_, language) = client.get_language(code).await?;
        match format {
            OutputFormat::Table => print_languages_table(&[language]),
            OutputFormat::Json => print_json(&language),
            OutputFormat::Csv => print_languages_csv(&[language])?,
        }
        return Ok(());
    }

    let pages = super::page_params(args.page, args.per_page);
    let (summary, languages) = client.list_languages(pages.as_ref()).await?;

    eprintln!(
        "Page {}/{} ({} total languages)",
        summary.page, summary.pages, summary.total
    );

    match format {
        OutputFormat::Table => print_languages_table(&languages),
        OutputFormat::Json => print_json(&languages),
        OutputFormat::Csv => print_languages_csv(&languages)?,
    }

    Ok(())
}
