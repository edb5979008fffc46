use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use coinmarketcap_lib::Coinmarketcap;

use super::{parse_time, HistoryArgs, PageArgs, PairsArgs};
use crate::output::{
    build_crypto_info_rows, build_crypto_map_rows, build_listing_rows, build_market_pair_rows,
    build_ohlcv_history_rows, build_ohlcv_latest_rows, build_quote_history_rows,
    build_quote_rows, print_json, print_table, OutputFormat,
};

#[derive(Args)]
pub struct IdsArgs {
    /// CoinMarketCap ids, comma separated (e.g. 1,1027)
    #[arg(long, value_delimiter = ',', required = true)]
    pub id: Vec<i64>,
}

#[derive(Args)]
pub struct OhlcvArgs {
    /// CoinMarketCap id
    #[arg(long)]
    pub id: i64,

    /// Range start; with --end selects historical OHLCV
    #[arg(long, value_parser = parse_time)]
    pub start: Option<DateTime<Utc>>,

    /// Range end; with --start selects historical OHLCV
    #[arg(long, value_parser = parse_time)]
    pub end: Option<DateTime<Utc>>,
}

pub async fn run_info(args: &IdsArgs, client: &Coinmarketcap, format: &OutputFormat) -> Result<()> {
    let info = client.get_cryptocurrency_info(&args.id).await?;
    match format {
        OutputFormat::Json => print_json(&info),
        _ => print_table(build_crypto_info_rows(&info), format),
    }
    Ok(())
}

pub async fn run_map(client: &Coinmarketcap, format: &OutputFormat) -> Result<()> {
    let map = client.get_cryptocurrency_id_map().await?;
    match format {
        OutputFormat::Json => print_json(&map),
        _ => print_table(build_crypto_map_rows(&map), format),
    }
    Ok(())
}

pub async fn run_listings(
    args: &PageArgs,
    client: &Coinmarketcap,
    currency: &str,
    format: &OutputFormat,
) -> Result<()> {
    let listings = client
        .get_cryptocurrency_latest_listing(args.start, args.limit)
        .await?;
    match format {
        OutputFormat::Json => print_json(&listings),
        _ => print_table(build_listing_rows(&listings, currency), format),
    }
    Ok(())
}

pub async fn run_quotes(
    args: &IdsArgs,
    client: &Coinmarketcap,
    currency: &str,
    format: &OutputFormat,
) -> Result<()> {
    let quotes = client.get_cryptocurrency_latest_quotes(&args.id).await?;
    match format {
        OutputFormat::Json => print_json(&quotes),
        _ => print_table(build_quote_rows(&quotes, currency), format),
    }
    Ok(())
}

pub async fn run_quotes_history(
    args: &HistoryArgs,
    client: &Coinmarketcap,
    currency: &str,
    format: &OutputFormat,
) -> Result<()> {
    let history = client
        .get_cryptocurrency_historical_quotes(args.id, args.start, args.end)
        .await?;
    match format {
        OutputFormat::Json => print_json(&history),
        _ => print_table(build_quote_history_rows(&history, currency), format),
    }
    Ok(())
}

pub async fn run_market_pairs(
    args: &PairsArgs,
    client: &Coinmarketcap,
    currency: &str,
    format: &OutputFormat,
) -> Result<()> {
    let pairs = client
        .get_cryptocurrency_latest_market_pairs(args.id, args.page.start, args.page.limit)
        .await?;
    match format {
        OutputFormat::Json => print_json(&pairs),
        _ => print_table(build_market_pair_rows(&pairs, currency), format),
    }
    Ok(())
}

pub async fn run_ohlcv(
    args: &OhlcvArgs,
    client: &Coinmarketcap,
    currency: &str,
    format: &OutputFormat,
) -> Result<()> {
    if args.start.is_none() && args.end.is_none() {
        let latest = client.get_cryptocurrency_ohlc_latest(args.id).await?;
        match format {
            OutputFormat::Json => print_json(&latest),
            _ => print_table(build_ohlcv_latest_rows(&latest, currency), format),
        }
        return Ok(());
    }

    let history = client
        .get_cryptocurrency_ohlc_historical(args.id, args.start, args.end)
        .await?;
    match format {
        OutputFormat::Json => print_json(&history),
        _ => print_table(build_ohlcv_history_rows(&history, currency), format),
    }
    Ok(())
}
