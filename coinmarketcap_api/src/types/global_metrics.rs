//! Aggregate market metrics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// `global-metrics/quotes/latest` payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlobalMetrics {
    pub btc_dominance: Option<f64>,
    pub eth_dominance: Option<f64>,
    pub active_cryptocurrencies: Option<i64>,
    pub active_market_pairs: Option<i64>,
    pub active_exchanges: Option<i64>,
    pub last_updated: Option<String>,
    #[serde(default)]
    pub quote: HashMap<String, GlobalQuote>,
}

/// Total market capitalisation and volume in a single convert currency.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GlobalQuote {
    pub total_market_cap: Option<f64>,
    pub total_volume_24h: Option<f64>,
    pub last_updated: Option<String>,
    pub timestamp: Option<String>,
}

/// `global-metrics/quotes/historical` payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlobalMetricsHistorical {
    #[serde(default)]
    pub quotes: Vec<GlobalMetricsHistoricalQuote>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlobalMetricsHistoricalQuote {
    pub timestamp: String,
    pub btc_dominance: Option<f64>,
    #[serde(default)]
    pub quote: HashMap<String, GlobalQuote>,
}
