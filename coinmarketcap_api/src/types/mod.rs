mod meta;
pub use self::meta::{ApiResponse, Status};

mod cryptocurrency;
pub use self::cryptocurrency::{
    CryptocurrencyHistoricalQuotes, CryptocurrencyInfo, CryptocurrencyListing,
    CryptocurrencyMap, CryptocurrencyMarketPairs, CryptocurrencyUrls, HistoricalQuote,
    MarketPair, MarketPairCurrency, MarketPairExchange, MarketPairQuote, Ohlcv,
    OhlcvHistorical, OhlcvLatest, OhlcvQuote, Platform, Quote,
};

mod exchange;
pub use self::exchange::{
    ExchangeHistoricalQuote, ExchangeHistoricalQuotes, ExchangeInfo, ExchangeMap,
    ExchangeMarketPair, ExchangeMarketPairs, ExchangeQuote, ExchangeUrls, ExchangeVolume,
};

mod global_metrics;
pub use self::global_metrics::{
    GlobalMetrics, GlobalMetricsHistorical, GlobalMetricsHistoricalQuote, GlobalQuote,
};

mod tools;
pub use self::tools::{ConversionQuote, PriceConversion};
