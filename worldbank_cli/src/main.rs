mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use worldbank_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "worldbank")]
#[command(about = "Query the World Bank Open Data API")]
struct Cli {
    /// Output format: table, json, or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Language code for localized responses (e.g. es, fr, ja)
    #[arg(long, global = true)]
    language: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List or look up countries
    Countries(commands::countries::CountriesArgs),
    /// List or look up regions
    Regions(commands::regions::RegionsArgs),
    /// List or look up data sources
    Sources(commands::sources::SourcesArgs),
    /// List or look up topics
    Topics(commands::topics::TopicsArgs),
    /// List or look up income levels
    IncomeLevels(commands::income_levels::IncomeLevelsArgs),
    /// List or look up lending types
    LendingTypes(commands::lending_types::LendingTypesArgs),
    /// List or look up languages
    Languages(commands::languages::LanguagesArgs),
    /// List or look up indicators
    Indicators(commands::indicators::IndicatorsArgs),
    /// Fetch indicator observations
    Values(Box<commands::values::ValuesArgs>),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("worldbank_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let mut client = Client::new();
    if let Some(language) = &cli.language {
        client = client.with_language(language);
    }

    match &cli.command {
        Commands::Countries(args) => commands::countries::run(args, &client, &format).await?,
        Commands::Regions(args) => commands::regions::run(args, &client, &format).await?,
        Commands::Sources(args) => commands::sources::run(args, &client, &format).await?,
        Commands::Topics(args) => commands::topics::run(args, &client, &format).await?,
        Commands::IncomeLevels(args) => {
            commands::income_levels::run(args, &client, &format).await?
        }
        Commands::LendingTypes(args) => {
            commands::lending_types::run(args, &client, &format).await?
        }
        Commands::Languages(args) => commands::languages::run(args, &client, &format).await?,
        Commands::Indicators(args) => commands::indicators::run(args, &client, &format).await?,
        Commands::Values(args) => commands::values::run(args.as_ref(), &client, &format).await?,
    }

    Ok(())
}
