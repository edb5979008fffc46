use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use coinmarketcap_lib::Coinmarketcap;

use super::parse_time;
use crate::output::{build_conversion_rows, print_json, print_table, OutputFormat};

#[derive(Args)]
pub struct ConvertArgs {
    /// Amount to convert
    #[arg(long)]
    pub amount: f64,

    /// CoinMarketCap id of the currency to convert from
    #[arg(long)]
    pub id: i64,

    /// Convert at this historical time instead of the latest price
    #[arg(long, value_parser = parse_time)]
    pub time: Option<DateTime<Utc>>,
}

pub async fn run(args: &ConvertArgs, client: &Coinmarketcap, format: &OutputFormat) -> Result<()> {
    let conversion = client
        .get_price_conversion(args.amount, args.id, args.time)
        .await?;
    match format {
        OutputFormat::Json => print_json(&conversion),
        _ => print_table(build_conversion_rows(&conversion), format),
    }
    Ok(())
}
