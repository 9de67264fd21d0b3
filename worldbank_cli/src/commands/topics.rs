use anyhow::Result;
use clap::Args;
use worldbank_api::Client;

use crate::output::{
    print_indicators_table, print_json, print_topics_csv, print_topics_table, OutputFormat,
};

#[derive(Args)]
pub struct TopicsArgs {
    /// Get a single topic by ID
    #[arg(long)]
    pub id: Option<String>,

    /// List the indicators under the topic given by --id
    #[arg(long, requires = "id")]
    pub indicators: bool,

    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<i64>,
}

pub async fn run(args: &TopicsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let pages = super::page_params(args.page, args.per_page);

    if let Some(id) = &args.id {
        if args.indicators {
            let (summary, indicators) =
                client.list_indicators_by_topic(id, pages.as_ref()).await?;
            eprintln!(
                "Page {}/{} ({} total indicators)",
                summary.page, summary.pages, summary.total
            );
            match format {
                OutputFormat::Table => print_indicators_table(&indicators),
                OutputFormat::Json => print_json(&indicators),
                OutputFormat::Csv => crate::output::print_indicators_csv(&indicators)?,
            }
            return Ok(());
        }

        let (_, topic) = client.get_topic(id).await?;
        match format {
            OutputFormat::Table => print_topics_table(&[topic]),
            OutputFormat::Json => print_json(&topic),
            OutputFormat::Csv => print_topics_csv(&[topic])?,
        }
        return Ok(());
    }

    let (summary, topics) = client.list_topics(pages.as_ref()).await?;

    eprintln!(
        "Page {}/{} ({} total topics)",
        summary.page, summary.pages, summary.total
    );

    match format {
        OutputFormat::Table => print_topics_table(&topics),
        OutputFormat::Json => print_json(&topics),
        OutputFormat::Csv => print_topics_csv(&topics)?,
    }

    Ok(())
}
