//! HTTP client for the CoinMarketCap Pro API.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    endpoint::Endpoint,
    query::{
        ConvertQuery, HistoricalQuery, IdQuery, ListingQuery, MapQuery, MarketPairsQuery,
        PriceConversionQuery, Query,
    },
    types::{
        ApiResponse, CryptocurrencyHistoricalQuotes, CryptocurrencyInfo, CryptocurrencyListing,
        CryptocurrencyMap, CryptocurrencyMarketPairs, ExchangeHistoricalQuotes, ExchangeInfo,
        ExchangeMap, ExchangeMarketPairs, ExchangeQuote, GlobalMetrics, GlobalMetricsHistorical,
        OhlcvHistorical, OhlcvLatest, PriceConversion, Status,
    },
    Error,
};

/// Production API host.
pub const PRODUCTION_API_URL: &str = "https://pro-api.coinmarketcap.com";

/// Sandbox API host. Serves mock data and accepts sandbox keys only.
pub const SANDBOX_API_URL: &str = "https://sandbox-api.coinmarketcap.com";

const API_VERSION: &str = "/v1/";

/// Header carrying the account API key.
const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Request timeout for CoinMarketCap API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the CoinMarketCap Pro API.
///
/// Every call is a GET against `{base}/v1/{endpoint}` carrying the API key
/// header. The response envelope is unwrapped and only `data` is returned.
pub struct Client {
    client: reqwest::Client,
    api_key: String,
    /// Base URL for the API. Defaults to [`PRODUCTION_API_URL`].
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::with_base_url(PRODUCTION_API_URL, api_key)
    }

    /// Creates a new client pointing at the sandbox API.
    pub fn sandbox(api_key: String) -> Result<Self, Error> {
        Self::with_base_url(SANDBOX_API_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            client,
            api_key,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, endpoint: Endpoint, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(
            format!("{}{}{}", &self.base_api_url, API_VERSION, endpoint.path()).as_str(),
        )
        .map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get<T, Q>(&self, endpoint: Endpoint, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(endpoint, query)?;
        tracing::debug!("GET {}", endpoint);

        let resp = self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get {}: {}", endpoint, e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::InvalidApiKey);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited);
        }

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request to {} failed with status {}: {}", endpoint, status, snippet);
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body) {
                if envelope.status.is_error() {
                    return Err(api_error(envelope.status));
                }
            }
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let envelope = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body).map_err(
            |e| {
                let snippet = truncate_body(&body);
                tracing::error!("Failed to parse {}: {} | body: {}", endpoint, e, snippet);
                Error::ParseFailed(e.to_string())
            },
        )?;

        if envelope.status.is_error() {
            return Err(api_error(envelope.status));
        }

        let data = envelope
            .data
            .ok_or_else(|| Error::ParseFailed(format!("{} response has no data", endpoint)))?;

        serde_json::from_value::<T>(data).map_err(|e| {
            tracing::error!("Failed to decode {} data: {}", endpoint, e);
            Error::ParseFailed(e.to_string())
        })
    }

    /// Fetches static metadata for one or more cryptocurrencies, keyed by id.
    pub async fn get_cryptocurrency_info(
        &self,
        query: &IdQuery,
    ) -> Result<HashMap<String, CryptocurrencyInfo>, Error> {
        self.get(Endpoint::CryptocurrencyInfo, query).await
    }

    /// Fetches the mapping of all cryptocurrencies to CoinMarketCap ids.
    pub async fn get_cryptocurrency_map(
        &self,
        query: &MapQuery,
    ) -> Result<Vec<CryptocurrencyMap>, Error> {
        self.get(Endpoint::CryptocurrencyMap, query).await
    }

    /// Fetches the latest market listings, ranked by market cap unless sorted otherwise.
    pub async fn get_cryptocurrency_listings_latest(
        &self,
        query: &ListingQuery,
    ) -> Result<Vec<CryptocurrencyListing>, Error> {
        self.get(Endpoint::CryptocurrencyListingsLatest, query)
            .await
    }

    /// Fetches the active market pairs for a cryptocurrency.
    pub async fn get_cryptocurrency_market_pairs_latest(
        &self,
        query: &MarketPairsQuery,
    ) -> Result<CryptocurrencyMarketPairs, Error> {
        self.get(Endpoint::CryptocurrencyMarketPairsLatest, query)
            .await
    }

    /// Fetches historical OHLCV periods for a cryptocurrency.
    pub async fn get_cryptocurrency_ohlcv_historical(
        &self,
        query: &HistoricalQuery,
    ) -> Result<OhlcvHistorical, Error> {
        self.get(Endpoint::CryptocurrencyOhlcvHistorical, query)
            .await
    }

    /// Fetches the current-day OHLCV for one or more cryptocurrencies, keyed by id.
    pub async fn get_cryptocurrency_ohlcv_latest(
        &self,
        query: &IdQuery,
    ) -> Result<HashMap<String, OhlcvLatest>, Error> {
        self.get(Endpoint::CryptocurrencyOhlcvLatest, query).await
    }

    /// Fetches the latest market quote for one or more cryptocurrencies, keyed by id.
    pub async fn get_cryptocurrency_quotes_latest(
        &self,
        query: &IdQuery,
    ) -> Result<HashMap<String, CryptocurrencyListing>, Error> {
        self.get(Endpoint::CryptocurrencyQuotesLatest, query).await
    }

    /// Fetches historical market quotes for a cryptocurrency.
    pub async fn get_cryptocurrency_quotes_historical(
        &self,
        query: &HistoricalQuery,
    ) -> Result<CryptocurrencyHistoricalQuotes, Error> {
        self.get(Endpoint::CryptocurrencyQuotesHistorical, query)
            .await
    }

    /// Fetches static metadata for one or more exchanges, keyed by id.
    pub async fn get_exchange_info(
        &self,
        query: &IdQuery,
    ) -> Result<HashMap<String, ExchangeInfo>, Error> {
        self.get(Endpoint::ExchangeInfo, query).await
    }

    /// Fetches the mapping of all exchanges to CoinMarketCap ids.
    pub async fn get_exchange_map(&self, query: &MapQuery) -> Result<Vec<ExchangeMap>, Error> {
        self.get(Endpoint::ExchangeMap, query).await
    }

    /// Fetches the active market pairs listed on an exchange.
    pub async fn get_exchange_market_pairs_latest(
        &self,
        query: &MarketPairsQuery,
    ) -> Result<ExchangeMarketPairs, Error> {
        self.get(Endpoint::ExchangeMarketPairsLatest, query).await
    }

    /// Fetches the latest volume quotes for one or more exchanges, keyed by id.
    pub async fn get_exchange_quotes_latest(
        &self,
        query: &IdQuery,
    ) -> Result<HashMap<String, ExchangeQuote>, Error> {
        self.get(Endpoint::ExchangeQuotesLatest, query).await
    }

    /// Fetches historical volume quotes for an exchange.
    pub async fn get_exchange_quotes_historical(
        &self,
        query: &HistoricalQuery,
    ) -> Result<ExchangeHistoricalQuotes, Error> {
        self.get(Endpoint::ExchangeQuotesHistorical, query).await
    }

    /// Fetches the latest aggregate market metrics.
    pub async fn get_global_metrics_quotes_latest(
        &self,
        query: &ConvertQuery,
    ) -> Result<GlobalMetrics, Error> {
        self.get(Endpoint::GlobalMetricsQuotesLatest, query).await
    }

    /// Fetches historical aggregate market metrics.
    pub async fn get_global_metrics_quotes_historical(
        &self,
        query: &HistoricalQuery,
    ) -> Result<GlobalMetricsHistorical, Error> {
        self.get(Endpoint::GlobalMetricsQuotesHistorical, query)
            .await
    }

    /// Converts an amount of one cryptocurrency into the requested convert currencies.
    pub async fn get_price_conversion(
        &self,
        query: &PriceConversionQuery,
    ) -> Result<PriceConversion, Error> {
        self.get(Endpoint::PriceConversion, query).await
    }
}

fn api_error(status: Status) -> Error {
    Error::Api {
        code: status.error_code,
        message: status.error_message.unwrap_or_default(),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_with_defaults() {
        let client = Client::new("test-key".to_string()).unwrap();
        assert_eq!(client.base_url(), PRODUCTION_API_URL);
    }

    #[test]
    fn sandbox_client_targets_sandbox_host() {
        let client = Client::sandbox("test-key".to_string()).unwrap();
        assert_eq!(client.base_url(), SANDBOX_API_URL);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = Client::with_base_url("http://localhost:1234/", "k".to_string()).unwrap();
        let url = client
            .get_url(Endpoint::CryptocurrencyMap, &MapQuery::default())
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/v1/cryptocurrency/map");
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
        let long = "x".repeat(2500);
        let out = truncate_body(&long);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
    }
}
