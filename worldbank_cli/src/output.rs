use anyhow::Result;
use serde::Serialize;
use tabled::{Table, Tabled};
use worldbank_api::types::{
    Country, IncomeLevel, Indicator, IndicatorValue, IndicatorValueWithFootnote, Language,
    LendingType, Region, Source, Topic,
};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
struct CountryRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Region")]
    #[serde(rename = "Region")]
    region: String,
    #[tabled(rename = "Income Level")]
    #[serde(rename = "Income Level")]
    income_level: String,
    #[tabled(rename = "Capital")]
    #[serde(rename = "Capital")]
    capital: String,
}

#[derive(Tabled, Serialize)]
struct RegionRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "ISO2")]
    #[serde(rename = "ISO2")]
    iso2: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
}

#[derive(Tabled, Serialize)]
struct SourceRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Last Updated")]
    #[serde(rename = "Last Updated")]
    last_updated: String,
}

#[derive(Tabled, Serialize)]
struct TopicRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Topic")]
    #[serde(rename = "Topic")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct IncomeLevelRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "ISO2")]
    #[serde(rename = "ISO2")]
    iso2: String,
    #[tabled(rename = "Income Level")]
    #[serde(rename = "Income Level")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct LendingTypeRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "ISO2")]
    #[serde(rename = "ISO2")]
    iso2: String,
    #[tabled(rename = "Lending Type")]
    #[serde(rename = "Lending Type")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct LanguageRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Native Form")]
    #[serde(rename = "Native Form")]
    native_form: String,
}

#[derive(Tabled, Serialize)]
struct IndicatorRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
}

#[derive(Tabled, Serialize)]
struct ValueRow {
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
    #[tabled(rename = "Indicator")]
    #[serde(rename = "Indicator")]
    indicator: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
    #[tabled(rename = "Footnote")]
    #[serde(rename = "Footnote")]
    footnote: String,
}

// -- Row builders --

fn build_country_rows(countries: &[Country]) -> Vec<CountryRow> {
    countries
        .iter()
        .map(|c| CountryRow {
            id: c.id.clone(),
            name: c.name.clone(),
            region: c.region.value.clone(),
            income_level: c.income_level.value.clone(),
            capital: c.capital_city.clone(),
        })
        .collect()
}

fn build_region_rows(regions: &[Region]) -> Vec<RegionRow> {
    regions
        .iter()
        .map(|r| RegionRow {
            code: r.code.clone(),
            iso2: r.iso2code.clone(),
            name: r.name.trim().to_string(),
        })
        .collect()
}

fn build_source_rows(sources: &[Source]) -> Vec<SourceRow> {
    sources
        .iter()
        .map(|s| SourceRow {
            id: s.id.clone(),
            code: s.code.clone(),
            name: s.name.clone(),
            last_updated: s.last_updated.clone(),
        })
        .collect()
}

fn build_topic_rows(topics: &[Topic]) -> Vec<TopicRow> {
    topics
        .iter()
        .map(|t| TopicRow {
            id: t.id.clone(),
            value: t.value.trim().to_string(),
        })
        .collect()
}

fn build_income_level_rows(levels: &[IncomeLevel]) -> Vec<IncomeLevelRow> {
    levels
        .iter()
        .map(|l| IncomeLevelRow {
            id: l.id.clone(),
            iso2: l.iso2code.clone(),
            value: l.value.clone(),
        })
        .collect()
}

fn build_lending_type_rows(types: &[LendingType]) -> Vec<LendingTypeRow> {
    types
        .iter()
        .map(|t| LendingTypeRow {
            id: t.id.clone(),
            iso2: t.iso2code.clone(),
            value: t.value.clone(),
        })
        .collect()
}

fn build_language_rows(languages: &[Language]) -> Vec<LanguageRow> {
    languages
        .iter()
        .map(|l| LanguageRow {
            code: l.code.clone(),
            name: l.name.clone(),
            native_form: l.native_form.clone(),
        })
        .collect()
}

fn build_indicator_rows(indicators: &[Indicator]) -> Vec<IndicatorRow> {
    indicators
        .iter()
        .map(|i| IndicatorRow {
            id: i.id.clone(),
            name: i.name.clone(),
            source: i.source.value.clone(),
        })
        .collect()
}

fn build_value_rows(values: &[IndicatorValue]) -> Vec<ValueRow> {
    values
        .iter()
        .map(|v| ValueRow {
            country: v.country.value.clone(),
            indicator: v.indicator.id.clone(),
            date: v.date.clone(),
            value: format_observation(v.value),
            footnote: String::new(),
        })
        .collect()
}

fn build_footnote_value_rows(values: &[IndicatorValueWithFootnote]) -> Vec<ValueRow> {
    values
        .iter()
        .map(|v| ValueRow {
            country: v.value.country.value.clone(),
            indicator: v.value.indicator.id.clone(),
            date: v.value.date.clone(),
            value: format_observation(v.value.value),
            footnote: v.footnote.clone(),
        })
        .collect()
}

fn format_observation(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

// -- Table output --

pub fn print_countries_table(countries: &[Country]) {
    println!("{}", Table::new(build_country_rows(countries)));
}

pub fn print_regions_table(regions: &[Region]) {
    println!("{}", Table::new(build_region_rows(regions)));
}

pub fn print_sources_table(sources: &[Source]) {
    println!("{}", Table::new(build_source_rows(sources)));
}

pub fn print_topics_table(topics: &[Topic]) {
    println!("{}", Table::new(build_topic_rows(topics)));
}

pub fn print_income_levels_table(levels: &[IncomeLevel]) {
    println!("{}", Table::new(build_income_level_rows(levels)));
}

pub fn print_lending_types_table(types: &[LendingType]) {
    println!("{}", Table::new(build_lending_type_rows(types)));
}

pub fn print_languages_table(languages: &[Language]) {
    println!("{}", Table::new(build_language_rows(languages)));
}

pub fn print_indicators_table(indicators: &[Indicator]) {
    println!("{}", Table::new(build_indicator_rows(indicators)));
}

pub fn print_values_table(values: &[IndicatorValue]) {
    println!("{}", Table::new(build_value_rows(values)));
}

pub fn print_footnote_values_table(values: &[IndicatorValueWithFootnote]) {
    println!("{}", Table::new(build_footnote_value_rows(values)));
}

// -- CSV output --

fn print_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_countries_csv(countries: &[Country]) -> Result<()> {
    print_csv(build_country_rows(countries))
}

pub fn print_regions_csv(regions: &[Region]) -> Result<()> {
    print_csv(build_region_rows(regions))
}

pub fn print_sources_csv(sources: &[Source]) -> Result<()> {
    print_csv(build_source_rows(sources))
}

pub fn print_topics_csv(topics: &[Topic]) -> Result<()> {
    print_csv(build_topic_rows(topics))
}

pub fn print_income_levels_csv(levels: &[IncomeLevel]) -> Result<()> {
    print_csv(build_income_level_rows(levels))
}

pub fn print_lending_types_csv(types: &[LendingType]) -> Result<()> {
    print_csv(build_lending_type_rows(types))
}

pub fn print_languages_csv(languages: &[Language]) -> Result<()> {
    print_csv(build_language_rows(languages))
}

pub fn print_indicators_csv(indicators: &[Indicator]) -> Result<()> {
    print_csv(build_indicator_rows(indicators))
}

pub fn print_values_csv(values: &[IndicatorValue]) -> Result<()> {
    print_csv(build_value_rows(values))
}

pub fn print_footnote_values_csv(values: &[IndicatorValueWithFootnote]) -> Result<()> {
    print_csv(build_footnote_value_rows(values))
}

// -- JSON output --

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
