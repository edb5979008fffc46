//! Exchange payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{MarketPairCurrency, MarketPairQuote};

/// Static metadata returned by `exchange/info`, keyed by id in the response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeInfo {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub date_launched: Option<String>,
    pub notice: Option<String>,
    #[serde(default)]
    pub urls: ExchangeUrls,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeUrls {
    pub website: Vec<String>,
    pub twitter: Vec<String>,
    pub blog: Vec<String>,
    pub chat: Vec<String>,
    pub fee: Vec<String>,
}

/// One entry of `exchange/map`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeMap {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub is_active: i64,
    pub first_historical_data: Option<String>,
    pub last_historical_data: Option<String>,
}

/// `exchange/market-pairs/latest` payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeMarketPairs {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub num_market_pairs: i64,
    #[serde(default)]
    pub market_pairs: Vec<ExchangeMarketPair>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeMarketPair {
    pub market_pair: String,
    pub market_pair_base: MarketPairCurrency,
    pub market_pair_quote: MarketPairCurrency,
    #[serde(default)]
    pub quote: HashMap<String, MarketPairQuote>,
}

/// `exchange/quotes/latest` entry, keyed by id in the response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeQuote {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub num_market_pairs: Option<i64>,
    pub last_updated: Option<String>,
    #[serde(default)]
    pub quote: HashMap<String, ExchangeVolume>,
}

/// Exchange volume in a single convert currency.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExchangeVolume {
    pub volume_24h: Option<f64>,
    pub volume_24h_adjusted: Option<f64>,
    pub volume_7d: Option<f64>,
    pub volume_30d: Option<f64>,
    pub percent_change_volume_24h: Option<f64>,
    pub percent_change_volume_7d: Option<f64>,
    pub percent_change_volume_30d: Option<f64>,
    pub timestamp: Option<String>,
}

/// `exchange/quotes/historical` payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeHistoricalQuotes {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub quotes: Vec<ExchangeHistoricalQuote>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeHistoricalQuote {
    pub timestamp: String,
    pub num_market_pairs: Option<i64>,
    #[serde(default)]
    pub quote: HashMap<String, ExchangeVolume>,
}
