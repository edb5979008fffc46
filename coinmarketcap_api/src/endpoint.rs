//! The set of CoinMarketCap `/v1/` resources known to this crate.

/// A CoinMarketCap REST resource, addressed relative to `/v1/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CryptocurrencyInfo,
    CryptocurrencyMap,
    CryptocurrencyListingsHistorical,
    CryptocurrencyListingsLatest,
    CryptocurrencyMarketPairsLatest,
    CryptocurrencyOhlcvHistorical,
    CryptocurrencyOhlcvLatest,
    CryptocurrencyQuotesLatest,
    CryptocurrencyQuotesHistorical,
    ExchangeInfo,
    ExchangeMap,
    ExchangeListingsHistorical,
    ExchangeListingsLatest,
    ExchangeMarketPairsLatest,
    ExchangeQuotesLatest,
    ExchangeQuotesHistorical,
    GlobalMetricsQuotesLatest,
    GlobalMetricsQuotesHistorical,
    PriceConversion,
}

impl Endpoint {
    /// Every endpoint, in the order the vendor documents them.
    pub const ALL: [Endpoint; 19] = [
        Endpoint::CryptocurrencyInfo,
        Endpoint::CryptocurrencyMap,
        Endpoint::CryptocurrencyListingsHistorical,
        Endpoint::CryptocurrencyListingsLatest,
        Endpoint::CryptocurrencyMarketPairsLatest,
        Endpoint::CryptocurrencyOhlcvHistorical,
        Endpoint::CryptocurrencyOhlcvLatest,
        Endpoint::CryptocurrencyQuotesLatest,
        Endpoint::CryptocurrencyQuotesHistorical,
        Endpoint::ExchangeInfo,
        Endpoint::ExchangeMap,
        Endpoint::ExchangeListingsHistorical,
        Endpoint::ExchangeListingsLatest,
        Endpoint::ExchangeMarketPairsLatest,
        Endpoint::ExchangeQuotesLatest,
        Endpoint::ExchangeQuotesHistorical,
        Endpoint::GlobalMetricsQuotesLatest,
        Endpoint::GlobalMetricsQuotesHistorical,
        Endpoint::PriceConversion,
    ];

    /// Path of the resource below the API version prefix.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::CryptocurrencyInfo => "cryptocurrency/info",
            Endpoint::CryptocurrencyMap => "cryptocurrency/map",
            Endpoint::CryptocurrencyListingsHistorical => "cryptocurrency/listings/historical",
            Endpoint::CryptocurrencyListingsLatest => "cryptocurrency/listings/latest",
            Endpoint::CryptocurrencyMarketPairsLatest => "cryptocurrency/market-pairs/latest",
            Endpoint::CryptocurrencyOhlcvHistorical => "cryptocurrency/ohlcv/historical",
            Endpoint::CryptocurrencyOhlcvLatest => "cryptocurrency/ohlcv/latest",
            Endpoint::CryptocurrencyQuotesLatest => "cryptocurrency/quotes/latest",
            Endpoint::CryptocurrencyQuotesHistorical => "cryptocurrency/quotes/historical",
            Endpoint::ExchangeInfo => "exchange/info",
            Endpoint::ExchangeMap => "exchange/map",
            Endpoint::ExchangeListingsHistorical => "exchange/listings/historical",
            Endpoint::ExchangeListingsLatest => "exchange/listings/latest",
            Endpoint::ExchangeMarketPairsLatest => "exchange/market-pairs/latest",
            Endpoint::ExchangeQuotesLatest => "exchange/quotes/latest",
            Endpoint::ExchangeQuotesHistorical => "exchange/quotes/historical",
            Endpoint::GlobalMetricsQuotesLatest => "global-metrics/quotes/latest",
            Endpoint::GlobalMetricsQuotesHistorical => "global-metrics/quotes/historical",
            Endpoint::PriceConversion => "tools/price-conversion",
        }
    }

    /// Whether the client offers a typed call for this resource.
    pub fn is_available(&self) -> bool {
        !matches!(
            self,
            Endpoint::CryptocurrencyListingsHistorical
                | Endpoint::ExchangeListingsHistorical
                | Endpoint::ExchangeListingsLatest
        )
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
