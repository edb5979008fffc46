use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// `tools/price-conversion` payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceConversion {
    pub id: i64,
    pub symbol: String,
    pub name: String,
    pub amount: f64,
    pub last_updated: Option<String>,
    /// Converted value keyed by convert symbol.
    #[serde(default)]
    pub quote: HashMap<String, ConversionQuote>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConversionQuote {
    pub price: Option<f64>,
    pub last_updated: Option<String>,
}
