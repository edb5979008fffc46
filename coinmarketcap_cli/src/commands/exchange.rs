use anyhow::Result;
use coinmarketcap_lib::Coinmarketcap;

use super::crypto::IdsArgs;
use super::{HistoryArgs, PageArgs, PairsArgs};
use crate::output::{
    build_exchange_history_rows, build_exchange_info_rows, build_exchange_map_rows,
    build_exchange_pair_rows, build_exchange_volume_rows, print_json, print_table, OutputFormat,
};

pub async fn run_info(args: &IdsArgs, client: &Coinmarketcap, format: &OutputFormat) -> Result<()> {
    let info = client.get_exchange_info(&args.id).await?;
    match format {
        OutputFormat::Json => print_json(&info),
        _ => print_table(build_exchange_info_rows(&info), format),
    }
    Ok(())
}

pub async fn run_map(args: &PageArgs, client: &Coinmarketcap, format: &OutputFormat) -> Result<()> {
    let map = client.get_exchange_map(args.start, args.limit).await?;
    match format {
        OutputFormat::Json => print_json(&map),
        _ => print_table(build_exchange_map_rows(&map), format),
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
        .get_exchange_latest_market_pairs(args.id, args.page.start, args.page.limit)
        .await?;
    match format {
        OutputFormat::Json => print_json(&pairs),
        _ => print_table(build_exchange_pair_rows(&pairs, currency), format),
    }
    Ok(())
}

pub async fn run_quotes(
    args: &IdsArgs,
    client: &Coinmarketcap,
    currency: &str,
    format: &OutputFormat,
) -> Result<()> {
    let quotes = client.get_exchange_latest_quotes(&args.id).await?;
    match format {
        OutputFormat::Json => print_json(&quotes),
        _ => print_table(build_exchange_volume_rows(&quotes, currency), format),
    }
    Ok(())
}

pub async fn run_history(
    args: &HistoryArgs,
    client: &Coinmarketcap,
    currency: &str,
    format: &OutputFormat,
) -> Result<()> {
    let history = client
        .get_exchange_historical_quotes(args.id, args.start, args.end)
        .await?;
    match format {
        OutputFormat::Json => print_json(&history),
        _ => print_table(build_exchange_history_rows(&history, currency), format),
    }
    Ok(())
}
