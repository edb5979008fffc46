use std::collections::HashMap;

use coinmarketcap_lib::types::{
    CryptocurrencyHistoricalQuotes, CryptocurrencyInfo, CryptocurrencyListing, CryptocurrencyMap,
    CryptocurrencyMarketPairs, ExchangeHistoricalQuotes, ExchangeInfo, ExchangeMap,
    ExchangeMarketPairs, ExchangeQuote, GlobalMetrics, GlobalMetricsHistorical, OhlcvHistorical,
    OhlcvLatest, PriceConversion,
};
use coinmarketcap_lib::{required_plan, AccountPlan, Endpoint};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Markdown,
    Json,
}

#[derive(Tabled, Serialize)]
pub struct ListingRow {
    #[tabled(rename = "Rank")]
    rank: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "24h %")]
    change_24h: String,
    #[tabled(rename = "Market Cap")]
    market_cap: String,
}

#[derive(Tabled, Serialize)]
pub struct CryptoMapRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Active")]
    active: bool,
}

#[derive(Tabled, Serialize)]
pub struct CryptoInfoRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Website")]
    website: String,
}

#[derive(Tabled, Serialize)]
pub struct MarketPairRow {
    #[tabled(rename = "Exchange")]
    exchange: String,
    #[tabled(rename = "Pair")]
    pair: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Volume 24h")]
    volume_24h: String,
}

#[derive(Tabled, Serialize)]
pub struct OhlcvRow {
    #[tabled(rename = "Open Time")]
    time_open: String,
    #[tabled(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    volume: String,
}

#[derive(Tabled, Serialize)]
pub struct QuoteHistoryRow {
    #[tabled(rename = "Timestamp")]
    timestamp: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Market Cap")]
    market_cap: String,
}

#[derive(Tabled, Serialize)]
pub struct ExchangeMapRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Active")]
    active: bool,
}

#[derive(Tabled, Serialize)]
pub struct ExchangeInfoRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Launched")]
    launched: String,
    #[tabled(rename = "Website")]
    website: String,
}

#[derive(Tabled, Serialize)]
pub struct ExchangeVolumeRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Pairs")]
    pairs: String,
    #[tabled(rename = "Volume 24h")]
    volume_24h: String,
    #[tabled(rename = "24h %")]
    change_24h: String,
}

#[derive(Tabled, Serialize)]
pub struct ExchangeHistoryRow {
    #[tabled(rename = "Timestamp")]
    timestamp: String,
    #[tabled(rename = "Pairs")]
    pairs: String,
    #[tabled(rename = "Volume 24h")]
    volume_24h: String,
}

#[derive(Tabled, Serialize)]
pub struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
pub struct GlobalHistoryRow {
    #[tabled(rename = "Timestamp")]
    timestamp: String,
    #[tabled(rename = "BTC Dominance")]
    btc_dominance: String,
    #[tabled(rename = "Market Cap")]
    market_cap: String,
    #[tabled(rename = "Volume 24h")]
    volume_24h: String,
}

#[derive(Tabled, Serialize)]
pub struct ConversionRow {
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
pub struct PlanRow {
    #[tabled(rename = "Endpoint")]
    endpoint: String,
    #[tabled(rename = "Required Plan")]
    required: String,
    #[tabled(rename = "Allowed")]
    allowed: String,
}

// -- Row builders --

/// Entries of an id-keyed response map, ordered by numeric id.
fn sorted_by_id<T>(map: &HashMap<String, T>) -> Vec<&T> {
    let mut entries: Vec<(&String, &T)> = map.iter().collect();
    entries.sort_by_key(|(k, _)| k.parse::<i64>().unwrap_or(i64::MAX));
    entries.into_iter().map(|(_, v)| v).collect()
}

pub fn build_listing_rows<'a, I>(listings: I, currency: &str) -> Vec<ListingRow>
where
    I: IntoIterator<Item = &'a CryptocurrencyListing>,
{
    listings
        .into_iter()
        .map(|l| {
            let quote = l.quote.get(currency);
            ListingRow {
                rank: l.cmc_rank.map(|r| r.to_string()).unwrap_or_default(),
                name: l.name.clone(),
                symbol: l.symbol.clone(),
                price: format_price(quote.and_then(|q| q.price)),
                change_24h: format_percent(quote.and_then(|q| q.percent_change_24h)),
                market_cap: format_amount(quote.and_then(|q| q.market_cap)),
            }
        })
        .collect()
}

pub fn build_quote_rows(
    quotes: &HashMap<String, CryptocurrencyListing>,
    currency: &str,
) -> Vec<ListingRow> {
    build_listing_rows(sorted_by_id(quotes), currency)
}

pub fn build_crypto_map_rows(map: &[CryptocurrencyMap]) -> Vec<CryptoMapRow> {
    map.iter()
        .map(|m| CryptoMapRow {
            id: m.id,
            name: m.name.clone(),
            symbol: m.symbol.clone(),
            slug: m.slug.clone(),
            active: m.is_active == 1,
        })
        .collect()
}

pub fn build_crypto_info_rows(info: &HashMap<String, CryptocurrencyInfo>) -> Vec<CryptoInfoRow> {
    sorted_by_id(info)
        .into_iter()
        .map(|i| CryptoInfoRow {
            id: i.id,
            name: i.name.clone(),
            symbol: i.symbol.clone(),
            category: i.category.clone().unwrap_or_default(),
            website: i.urls.website.first().cloned().unwrap_or_default(),
        })
        .collect()
}

pub fn build_market_pair_rows(pairs: &CryptocurrencyMarketPairs, currency: &str) -> Vec<MarketPairRow> {
    pairs
        .market_pairs
        .iter()
        .map(|p| {
            let quote = p.quote.get(currency);
            MarketPairRow {
                exchange: p.exchange.name.clone(),
                pair: p.market_pair.clone(),
                price: format_price(quote.and_then(|q| q.price)),
                volume_24h: format_amount(quote.and_then(|q| q.volume_24h)),
            }
        })
        .collect()
}

pub fn build_exchange_pair_rows(pairs: &ExchangeMarketPairs, currency: &str) -> Vec<MarketPairRow> {
    pairs
        .market_pairs
        .iter()
        .map(|p| {
            let quote = p.quote.get(currency);
            MarketPairRow {
                exchange: pairs.name.clone(),
                pair: p.market_pair.clone(),
                price: format_price(quote.and_then(|q| q.price)),
                volume_24h: format_amount(quote.and_then(|q| q.volume_24h)),
            }
        })
        .collect()
}

pub fn build_ohlcv_history_rows(history: &OhlcvHistorical, currency: &str) -> Vec<OhlcvRow> {
    history
        .quotes
        .iter()
        .map(|q| {
            let v = q.quote.get(currency).cloned().unwrap_or_default();
            OhlcvRow {
                time_open: q.time_open.clone(),
                open: format_price(v.open),
                high: format_price(v.high),
                low: format_price(v.low),
                close: format_price(v.close),
                volume: format_amount(v.volume),
            }
        })
        .collect()
}

pub fn build_ohlcv_latest_rows(latest: &HashMap<String, OhlcvLatest>, currency: &str) -> Vec<OhlcvRow> {
    sorted_by_id(latest)
        .into_iter()
        .map(|l| {
            let v = l.quote.get(currency).cloned().unwrap_or_default();
            OhlcvRow {
                time_open: l.time_open.clone().unwrap_or_default(),
                open: format_price(v.open),
                high: format_price(v.high),
                low: format_price(v.low),
                close: format_price(v.close),
                volume: format_amount(v.volume),
            }
        })
        .collect()
}

pub fn build_quote_history_rows(
    history: &CryptocurrencyHistoricalQuotes,
    currency: &str,
) -> Vec<QuoteHistoryRow> {
    history
        .quotes
        .iter()
        .map(|q| {
            let quote = q.quote.get(currency);
            QuoteHistoryRow {
                timestamp: q.timestamp.clone(),
                price: format_price(quote.and_then(|v| v.price)),
                market_cap: format_amount(quote.and_then(|v| v.market_cap)),
            }
        })
        .collect()
}

pub fn build_exchange_map_rows(map: &[ExchangeMap]) -> Vec<ExchangeMapRow> {
    map.iter()
        .map(|m| ExchangeMapRow {
            id: m.id,
            name: m.name.clone(),
            slug: m.slug.clone(),
            active: m.is_active == 1,
        })
        .collect()
}

pub fn build_exchange_info_rows(info: &HashMap<String, ExchangeInfo>) -> Vec<ExchangeInfoRow> {
    sorted_by_id(info)
        .into_iter()
        .map(|e| ExchangeInfoRow {
            id: e.id,
            name: e.name.clone(),
            launched: e
                .date_launched
                .as_deref()
                .map(|d| d.chars().take(10).collect())
                .unwrap_or_default(),
            website: e.urls.website.first().cloned().unwrap_or_default(),
        })
        .collect()
}

pub fn build_exchange_volume_rows(
    quotes: &HashMap<String, ExchangeQuote>,
    currency: &str,
) -> Vec<ExchangeVolumeRow> {
    sorted_by_id(quotes)
        .into_iter()
        .map(|e| {
            let v = e.quote.get(currency);
            ExchangeVolumeRow {
                id: e.id,
                name: e.name.clone(),
                pairs: e.num_market_pairs.map(|n| n.to_string()).unwrap_or_default(),
                volume_24h: format_amount(v.and_then(|q| q.volume_24h)),
                change_24h: format_percent(v.and_then(|q| q.percent_change_volume_24h)),
            }
        })
        .collect()
}

pub fn build_exchange_history_rows(
    history: &ExchangeHistoricalQuotes,
    currency: &str,
) -> Vec<ExchangeHistoryRow> {
    history
        .quotes
        .iter()
        .map(|q| ExchangeHistoryRow {
            timestamp: q.timestamp.clone(),
            pairs: q.num_market_pairs.map(|n| n.to_string()).unwrap_or_default(),
            volume_24h: format_amount(q.quote.get(currency).and_then(|v| v.volume_24h)),
        })
        .collect()
}

pub fn build_global_rows(metrics: &GlobalMetrics, currency: &str) -> Vec<MetricRow> {
    let quote = metrics.quote.get(currency);
    let count = |n: Option<i64>| n.map(|n| n.to_string()).unwrap_or_default();
    vec![
        MetricRow {
            metric: "Total Market Cap".to_string(),
            value: format_amount(quote.and_then(|q| q.total_market_cap)),
        },
        MetricRow {
            metric: "Volume 24h".to_string(),
            value: format_amount(quote.and_then(|q| q.total_volume_24h)),
        },
        MetricRow {
            metric: "BTC Dominance".to_string(),
            value: format_percent(metrics.btc_dominance),
        },
        MetricRow {
            metric: "ETH Dominance".to_string(),
            value: format_percent(metrics.eth_dominance),
        },
        MetricRow {
            metric: "Active Cryptocurrencies".to_string(),
            value: count(metrics.active_cryptocurrencies),
        },
        MetricRow {
            metric: "Active Exchanges".to_string(),
            value: count(metrics.active_exchanges),
        },
        MetricRow {
            metric: "Active Market Pairs".to_string(),
            value: count(metrics.active_market_pairs),
        },
    ]
}

pub fn build_global_history_rows(
    history: &GlobalMetricsHistorical,
    currency: &str,
) -> Vec<GlobalHistoryRow> {
    history
        .quotes
        .iter()
        .map(|q| {
            let quote = q.quote.get(currency);
            GlobalHistoryRow {
                timestamp: q.timestamp.clone(),
                btc_dominance: format_percent(q.btc_dominance),
                market_cap: format_amount(quote.and_then(|v| v.total_market_cap)),
                volume_24h: format_amount(quote.and_then(|v| v.total_volume_24h)),
            }
        })
        .collect()
}

pub fn build_conversion_rows(conversion: &PriceConversion) -> Vec<ConversionRow> {
    let mut currencies: Vec<&String> = conversion.quote.keys().collect();
    currencies.sort();
    currencies
        .into_iter()
        .map(|c| ConversionRow {
            amount: conversion.amount.to_string(),
            symbol: conversion.symbol.clone(),
            currency: c.clone(),
            value: format_price(conversion.quote[c].price),
        })
        .collect()
}

pub fn build_plan_rows(plan: AccountPlan) -> Vec<PlanRow> {
    Endpoint::ALL
        .iter()
        .map(|e| PlanRow {
            endpoint: e.path().to_string(),
            required: if e.is_available() {
                required_plan(*e).to_string()
            } else {
                "-".to_string()
            },
            allowed: if !e.is_available() {
                "unavailable".to_string()
            } else if plan.allows(*e) {
                "yes".to_string()
            } else {
                "no".to_string()
            },
        })
        .collect()
}

// -- Table output --

pub fn print_table<R: Tabled>(rows: Vec<R>, format: &OutputFormat) {
    let mut table = Table::new(rows);
    if let OutputFormat::Markdown = format {
        table.with(Style::markdown());
    }
    println!("{}", table);
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_amount(value: Option<f64>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let abs = value.abs();
    if abs >= 1e12 {
        format!("{:.2}T", value / 1e12)
    } else if abs >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{:.2}", value)
    }
}

fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) if v.abs() >= 1.0 => format!("{:.2}", v),
        Some(v) => format!("{:.6}", v),
        None => String::new(),
    }
}

fn format_percent(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}%", v)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_fixture<T: serde::de::DeserializeOwned>(json_str: &str) -> T {
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["data"].clone()).unwrap()
    }

    // -- formatting tests --

    #[test]
    fn test_format_amount_scales() {
        assert_eq!(format_amount(Some(2.4e12)), "2.40T");
        assert_eq!(format_amount(Some(7.0e10)), "70.00B");
        assert_eq!(format_amount(Some(1_500_000.0)), "1.50M");
        assert_eq!(format_amount(Some(50_000.0)), "50.0K");
        assert_eq!(format_amount(Some(12.5)), "12.50");
        assert_eq!(format_amount(None), "");
    }

    #[test]
    fn test_format_price_small_values_keep_precision() {
        assert_eq!(format_price(Some(66000.5)), "66000.50");
        assert_eq!(format_price(Some(0.000123)), "0.000123");
        assert_eq!(format_price(None), "");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(-1.2)), "-1.20%");
        assert_eq!(format_percent(None), "");
    }

    // -- Row builder tests --

    #[test]
    fn test_build_listing_rows_mapping() {
        let listings: Vec<CryptocurrencyListing> = load_fixture(include_str!(
            "../../coinmarketcap_api/tests/fixtures/listings_latest.json"
        ));
        let rows = build_listing_rows(&listings, "USD");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rank, "1");
        assert_eq!(rows[0].symbol, "BTC");
        assert_eq!(rows[0].price, "66000.50");
        assert_eq!(rows[0].change_24h, "-1.20%");
        assert_eq!(rows[0].market_cap, "1.30T");
    }

    #[test]
    fn test_build_listing_rows_missing_currency() {
        let listings: Vec<CryptocurrencyListing> = load_fixture(include_str!(
            "../../coinmarketcap_api/tests/fixtures/listings_latest.json"
        ));
        let rows = build_listing_rows(&listings, "EUR");
        assert_eq!(rows[1].name, "Ethereum");
        assert_eq!(rows[1].price, "");
    }

    #[test]
    fn test_build_exchange_map_rows_flags_inactive() {
        let map: Vec<ExchangeMap> = load_fixture(include_str!(
            "../../coinmarketcap_api/tests/fixtures/exchange_map.json"
        ));
        let rows = build_exchange_map_rows(&map);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].active);
        assert_eq!(rows[2].name, "Poloniex");
        assert!(!rows[2].active);
    }

    #[test]
    fn test_build_crypto_map_rows() {
        let map: Vec<CryptocurrencyMap> = load_fixture(include_str!(
            "../../coinmarketcap_api/tests/fixtures/cryptocurrency_map.json"
        ));
        let rows = build_crypto_map_rows(&map);
        assert_eq!(rows[1].id, 1027);
        assert_eq!(rows[1].slug, "ethereum");
    }

    #[test]
    fn test_build_global_rows() {
        let metrics: GlobalMetrics = load_fixture(include_str!(
            "../../coinmarketcap_api/tests/fixtures/global_metrics_latest.json"
        ));
        let rows = build_global_rows(&metrics, "USD");
        assert_eq!(rows[0].value, "2.40T");
        assert_eq!(rows[2].value, "54.20%");
        assert_eq!(rows[4].value, "9800");
    }

    #[test]
    fn test_build_conversion_rows() {
        let conversion: PriceConversion = load_fixture(include_str!(
            "../../coinmarketcap_api/tests/fixtures/price_conversion.json"
        ));
        let rows = build_conversion_rows(&conversion);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, "2");
        assert_eq!(rows[0].currency, "USD");
        assert_eq!(rows[0].value, "132001.00");
    }

    #[test]
    fn test_sorted_by_id_orders_numerically() {
        let map: HashMap<String, i64> =
            HashMap::from([("1027".to_string(), 1027), ("1".to_string(), 1), ("52".to_string(), 52)]);
        let ordered: Vec<i64> = sorted_by_id(&map).into_iter().copied().collect();
        assert_eq!(ordered, vec![1, 52, 1027]);
    }

    #[test]
    fn test_build_plan_rows_basic() {
        let rows = build_plan_rows(AccountPlan::Basic);
        assert_eq!(rows.len(), Endpoint::ALL.len());
        let row = |path: &str| rows.iter().find(|r| r.endpoint == path).unwrap();
        assert_eq!(row("cryptocurrency/map").allowed, "yes");
        assert_eq!(row("tools/price-conversion").allowed, "no");
        assert_eq!(row("tools/price-conversion").required, "hobbyist");
        assert_eq!(row("exchange/listings/latest").allowed, "unavailable");
    }

    #[test]
    fn test_markdown_table_headers() {
        let mut table = Table::new(build_plan_rows(AccountPlan::Enterprise));
        table.with(Style::markdown());
        let out = table.to_string();
        let header = out.lines().next().unwrap();
        assert!(header.contains("Endpoint"));
        assert!(header.contains("Required Plan"));
        assert!(!out.contains("| no "));
    }
}
