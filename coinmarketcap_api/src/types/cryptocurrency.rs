//! Cryptocurrency payloads: metadata, id map, listings, market pairs, OHLCV and quotes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Static metadata returned by `cryptocurrency/info`, keyed by id in the response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CryptocurrencyInfo {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    /// `coin` or `token`.
    pub category: Option<String>,
    pub slug: String,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub date_added: Option<String>,
    pub notice: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Parent chain for tokens. `None` for native coins.
    pub platform: Option<Platform>,
    #[serde(default)]
    pub urls: CryptocurrencyUrls,
}

/// Project links attached to [`CryptocurrencyInfo`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptocurrencyUrls {
    pub website: Vec<String>,
    pub technical_doc: Vec<String>,
    pub twitter: Vec<String>,
    pub reddit: Vec<String>,
    pub message_board: Vec<String>,
    pub announcement: Vec<String>,
    pub chat: Vec<String>,
    pub explorer: Vec<String>,
    pub source_code: Vec<String>,
}

/// The chain a token is issued on.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Platform {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub token_address: Option<String>,
}

/// One entry of `cryptocurrency/map`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CryptocurrencyMap {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    /// `1` when actively tracked.
    #[serde(default)]
    pub is_active: i64,
    pub rank: Option<i64>,
    pub first_historical_data: Option<String>,
    pub last_historical_data: Option<String>,
    pub platform: Option<Platform>,
}

/// Market data for one cryptocurrency.
///
/// Returned as a list by `cryptocurrency/listings/latest` and as a map keyed
/// by id by `cryptocurrency/quotes/latest`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CryptocurrencyListing {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub cmc_rank: Option<i64>,
    pub num_market_pairs: Option<i64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub last_updated: Option<String>,
    pub date_added: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub platform: Option<Platform>,
    /// Market quotes keyed by convert symbol (`USD` unless requested otherwise).
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

impl CryptocurrencyListing {
    /// The `USD` quote, if present.
    pub fn usd(&self) -> Option<&Quote> {
        self.quote.get("USD")
    }
}

/// Market quote in a single convert currency.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Quote {
    pub price: Option<f64>,
    pub volume_24h: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub market_cap: Option<f64>,
    pub last_updated: Option<String>,
    /// Set on historical quotes only.
    pub timestamp: Option<String>,
}

/// `cryptocurrency/market-pairs/latest` payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CryptocurrencyMarketPairs {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub num_market_pairs: i64,
    #[serde(default)]
    pub market_pairs: Vec<MarketPair>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketPair {
    pub exchange: MarketPairExchange,
    pub market_pair: String,
    pub market_pair_base: MarketPairCurrency,
    pub market_pair_quote: MarketPairCurrency,
    #[serde(default)]
    pub quote: HashMap<String, MarketPairQuote>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketPairExchange {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// One side of a trading pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketPairCurrency {
    pub currency_id: i64,
    pub currency_symbol: String,
    pub currency_type: Option<String>,
    pub exchange_symbol: Option<String>,
}

/// Pair quote; the `exchange_reported` entry leaves `volume_24h` unset.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MarketPairQuote {
    pub price: Option<f64>,
    pub volume_24h: Option<f64>,
    pub volume_24h_base: Option<f64>,
    pub volume_24h_quote: Option<f64>,
    pub last_updated: Option<String>,
}

/// `cryptocurrency/ohlcv/historical` payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OhlcvHistorical {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub quotes: Vec<OhlcvQuote>,
}

/// One OHLCV period.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OhlcvQuote {
    pub time_open: String,
    pub time_close: String,
    pub time_high: Option<String>,
    pub time_low: Option<String>,
    #[serde(default)]
    pub quote: HashMap<String, Ohlcv>,
}

/// Open/high/low/close/volume in a single convert currency.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Ohlcv {
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub market_cap: Option<f64>,
    pub last_updated: Option<String>,
    pub timestamp: Option<String>,
}

/// `cryptocurrency/ohlcv/latest` entry, keyed by id in the response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OhlcvLatest {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub last_updated: Option<String>,
    pub time_open: Option<String>,
    pub time_close: Option<String>,
    #[serde(default)]
    pub quote: HashMap<String, Ohlcv>,
}

/// `cryptocurrency/quotes/historical` payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CryptocurrencyHistoricalQuotes {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub quotes: Vec<HistoricalQuote>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoricalQuote {
    pub timestamp: String,
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}
