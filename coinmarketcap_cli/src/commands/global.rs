use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use coinmarketcap_lib::Coinmarketcap;

use super::parse_time;
use crate::output::{build_global_history_rows, build_global_rows, print_json, print_table, OutputFormat};

#[derive(Args)]
pub struct GlobalHistoryArgs {
    /// Range start, YYYY-MM-DD or RFC 3339
    #[arg(long, value_parser = parse_time)]
    pub start: Option<DateTime<Utc>>,

    /// Range end, YYYY-MM-DD or RFC 3339
    #[arg(long, value_parser = parse_time)]
    pub end: Option<DateTime<Utc>>,
}

pub async fn run_latest(client: &Coinmarketcap, currency: &str, format: &OutputFormat) -> Result<()> {
    let metrics = client.get_global_metric_latest_quotes().await?;
    match format {
        OutputFormat::Json => print_json(&metrics),
        _ => print_table(build_global_rows(&metrics, currency), format),
    }
    Ok(())
}

pub async fn run_history(
    args: &GlobalHistoryArgs,
    client: &Coinmarketcap,
    currency: &str,
    format: &OutputFormat,
) -> Result<()> {
    let history = client
        .get_global_metric_historical_quotes(args.start, args.end)
        .await?;
    match format {
        OutputFormat::Json => print_json(&history),
        _ => print_table(build_global_history_rows(&history, currency), format),
    }
    Ok(())
}
