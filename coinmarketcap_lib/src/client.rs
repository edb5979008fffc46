//! Plan-gated wrapper around the API client.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use coinmarketcap_api::types::{
    CryptocurrencyHistoricalQuotes, CryptocurrencyInfo, CryptocurrencyListing, CryptocurrencyMap,
    CryptocurrencyMarketPairs, ExchangeHistoricalQuotes, ExchangeInfo, ExchangeMap,
    ExchangeMarketPairs, ExchangeQuote, GlobalMetrics, GlobalMetricsHistorical, OhlcvHistorical,
    OhlcvLatest, PriceConversion,
};
use coinmarketcap_api::{
    Client, ConvertQuery, Endpoint, HistoricalQuery, IdQuery, ListingQuery, MapQuery,
    MarketPairsQuery, Pagination, PriceConversionQuery, PRODUCTION_API_URL, SANDBOX_API_URL,
};

use crate::config::Settings;
use crate::error::CoinmarketcapError;
use crate::plan::{required_plan, AccountPlan};
use crate::validation;

/// CoinMarketCap client that refuses calls the configured account plan cannot make.
///
/// Starts disabled. [`Coinmarketcap::setup`] enables it, stores the API key
/// and plan, and builds the HTTP client. Every endpoint method checks, in
/// order: the endpoint is offered, the client is enabled, a key is set, the
/// plan is high enough, and the arguments are valid. Only then is a request sent.
pub struct Coinmarketcap {
    name: String,
    enabled: bool,
    verbose: bool,
    api_key: String,
    plan: AccountPlan,
    base_url: String,
    convert: Vec<String>,
    client: Option<Client>,
}

impl Default for Coinmarketcap {
    fn default() -> Self {
        Self {
            name: "CoinMarketCap".to_string(),
            enabled: false,
            verbose: false,
            api_key: String::new(),
            plan: AccountPlan::Basic,
            base_url: PRODUCTION_API_URL.to_string(),
            convert: Vec::new(),
            client: None,
        }
    }
}

impl Coinmarketcap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every field to its default: disabled, basic plan, no key.
    pub fn set_defaults(&mut self) {
        *self = Self::default();
    }

    /// Applies settings. Disabled settings leave the client disabled and succeed.
    ///
    /// On error nothing is applied and the client is left disabled.
    pub fn setup(&mut self, settings: Settings) -> Result<(), CoinmarketcapError> {
        if !settings.enabled {
            self.enabled = false;
            return Ok(());
        }

        let base_url = match &settings.base_url {
            Some(url) => url.clone(),
            None if settings.sandbox => SANDBOX_API_URL.to_string(),
            None => PRODUCTION_API_URL.to_string(),
        };
        let built = settings.plan().and_then(|plan| {
            let client = Client::with_base_url(&base_url, settings.api_key.clone())?;
            Ok((plan, client))
        });
        let (plan, client) = match built {
            Ok(parts) => parts,
            Err(e) => {
                tracing::warn!("{}: setup failed: {}", self.name, e);
                self.enabled = false;
                return Err(e);
            }
        };

        self.plan = plan;
        self.name = settings.name;
        self.verbose = settings.verbose;
        self.api_key = settings.api_key;
        self.base_url = base_url;
        self.client = Some(client);
        self.enabled = true;

        if self.verbose {
            tracing::info!(
                "{} set up against {} with the {} plan",
                self.name,
                self.base_url,
                self.plan
            );
        }
        Ok(())
    }

    /// Sets the account plan from its name.
    pub fn set_account_plan(&mut self, plan: &str) -> Result<(), CoinmarketcapError> {
        self.plan = plan.parse::<AccountPlan>().map_err(|e| {
            tracing::warn!("{}: account plan {:?} not found", self.name, plan);
            e
        })?;
        Ok(())
    }

    /// Returns an error unless the configured plan is at least `min_required`.
    pub fn check_account_plan(&self, min_required: AccountPlan) -> Result<(), CoinmarketcapError> {
        self.plan.check(min_required)
    }

    /// Requests quotes in these symbols instead of the API default (`USD`).
    pub fn set_convert(&mut self, symbols: Vec<String>) {
        self.convert = symbols;
    }

    pub fn plan(&self) -> AccountPlan {
        self.plan
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn gate(&self, endpoint: Endpoint) -> Result<&Client, CoinmarketcapError> {
        if !endpoint.is_available() {
            return Err(CoinmarketcapError::Unsupported(endpoint));
        }
        if !self.enabled {
            return Err(CoinmarketcapError::Disabled);
        }
        if self.api_key.trim().is_empty() {
            return Err(CoinmarketcapError::MissingApiKey);
        }
        if let Err(e) = self.check_account_plan(required_plan(endpoint)) {
            tracing::warn!(
                "{}: {} plan cannot call {}, upgrade to {} or higher",
                self.name,
                self.plan,
                endpoint,
                required_plan(endpoint)
            );
            return Err(e);
        }
        let client = self.client.as_ref().ok_or(CoinmarketcapError::Disabled)?;
        if self.verbose {
            tracing::info!("{}: requesting {}", self.name, endpoint);
        }
        Ok(client)
    }

    fn id_query(&self, ids: Vec<i64>) -> IdQuery {
        IdQuery {
            ids,
            convert: self.convert.clone(),
        }
    }

    fn historical_query(
        &self,
        id: Option<i64>,
        time_start: Option<DateTime<Utc>>,
        time_end: Option<DateTime<Utc>>,
    ) -> HistoricalQuery {
        HistoricalQuery {
            id,
            time_start,
            time_end,
            convert: self.convert.clone(),
            ..Default::default()
        }
    }

    /// Static metadata for the given cryptocurrency ids, keyed by id.
    pub async fn get_cryptocurrency_info(
        &self,
        ids: &[i64],
    ) -> Result<HashMap<String, CryptocurrencyInfo>, CoinmarketcapError> {
        let client = self.gate(Endpoint::CryptocurrencyInfo)?;
        let ids = validation::validate_ids(ids)?;
        let query = IdQuery {
            ids,
            convert: Vec::new(),
        };
        Ok(client.get_cryptocurrency_info(&query).await?)
    }

    /// Mapping of every active cryptocurrency to its CoinMarketCap id.
    pub async fn get_cryptocurrency_id_map(
        &self,
    ) -> Result<Vec<CryptocurrencyMap>, CoinmarketcapError> {
        let client = self.gate(Endpoint::CryptocurrencyMap)?;
        Ok(client.get_cryptocurrency_map(&MapQuery::default()).await?)
    }

    /// Not offered; always fails with [`CoinmarketcapError::Unsupported`].
    pub async fn get_cryptocurrency_historical_listings(
        &self,
    ) -> Result<Vec<CryptocurrencyListing>, CoinmarketcapError> {
        Err(CoinmarketcapError::Unsupported(
            Endpoint::CryptocurrencyListingsHistorical,
        ))
    }

    /// Latest listings. Zero `start` / `limit` use the API defaults.
    pub async fn get_cryptocurrency_latest_listing(
        &self,
        start: i64,
        limit: i64,
    ) -> Result<Vec<CryptocurrencyListing>, CoinmarketcapError> {
        let client = self.gate(Endpoint::CryptocurrencyListingsLatest)?;
        validation::validate_pagination(start, limit)?;
        let query = ListingQuery {
            pagination: Pagination::new(start, limit),
            convert: self.convert.clone(),
            ..Default::default()
        };
        Ok(client.get_cryptocurrency_listings_latest(&query).await?)
    }

    /// Active market pairs for a cryptocurrency.
    pub async fn get_cryptocurrency_latest_market_pairs(
        &self,
        id: i64,
        start: i64,
        limit: i64,
    ) -> Result<CryptocurrencyMarketPairs, CoinmarketcapError> {
        let client = self.gate(Endpoint::CryptocurrencyMarketPairsLatest)?;
        let id = validation::validate_id(id)?;
        validation::validate_pagination(start, limit)?;
        let query = MarketPairsQuery {
            id,
            pagination: Pagination::new(start, limit),
            convert: self.convert.clone(),
        };
        Ok(client.get_cryptocurrency_market_pairs_latest(&query).await?)
    }

    /// Historical OHLCV for a cryptocurrency between two optional bounds.
    pub async fn get_cryptocurrency_ohlc_historical(
        &self,
        id: i64,
        time_start: Option<DateTime<Utc>>,
        time_end: Option<DateTime<Utc>>,
    ) -> Result<OhlcvHistorical, CoinmarketcapError> {
        let client = self.gate(Endpoint::CryptocurrencyOhlcvHistorical)?;
        let id = validation::validate_id(id)?;
        validation::validate_time_range(time_start, time_end)?;
        let query = self.historical_query(Some(id), time_start, time_end);
        Ok(client.get_cryptocurrency_ohlcv_historical(&query).await?)
    }

    /// Current-day OHLCV for a cryptocurrency, keyed by id.
    pub async fn get_cryptocurrency_ohlc_latest(
        &self,
        id: i64,
    ) -> Result<HashMap<String, OhlcvLatest>, CoinmarketcapError> {
        let client = self.gate(Endpoint::CryptocurrencyOhlcvLatest)?;
        let id = validation::validate_id(id)?;
        Ok(client
            .get_cryptocurrency_ohlcv_latest(&self.id_query(vec![id]))
            .await?)
    }

    /// Latest market quotes for the given cryptocurrency ids, keyed by id.
    pub async fn get_cryptocurrency_latest_quotes(
        &self,
        ids: &[i64],
    ) -> Result<HashMap<String, CryptocurrencyListing>, CoinmarketcapError> {
        let client = self.gate(Endpoint::CryptocurrencyQuotesLatest)?;
        let ids = validation::validate_ids(ids)?;
        Ok(client
            .get_cryptocurrency_quotes_latest(&self.id_query(ids))
            .await?)
    }

    /// Historical market quotes for a cryptocurrency.
    pub async fn get_cryptocurrency_historical_quotes(
        &self,
        id: i64,
        time_start: Option<DateTime<Utc>>,
        time_end: Option<DateTime<Utc>>,
    ) -> Result<CryptocurrencyHistoricalQuotes, CoinmarketcapError> {
        let client = self.gate(Endpoint::CryptocurrencyQuotesHistorical)?;
        let id = validation::validate_id(id)?;
        validation::validate_time_range(time_start, time_end)?;
        let query = self.historical_query(Some(id), time_start, time_end);
        Ok(client.get_cryptocurrency_quotes_historical(&query).await?)
    }

    /// Static metadata for the given exchange ids, keyed by id.
    pub async fn get_exchange_info(
        &self,
        ids: &[i64],
    ) -> Result<HashMap<String, ExchangeInfo>, CoinmarketcapError> {
        let client = self.gate(Endpoint::ExchangeInfo)?;
        let ids = validation::validate_ids(ids)?;
        let query = IdQuery {
            ids,
            convert: Vec::new(),
        };
        Ok(client.get_exchange_info(&query).await?)
    }

    /// Mapping of exchanges to CoinMarketCap ids.
    pub async fn get_exchange_map(
        &self,
        start: i64,
        limit: i64,
    ) -> Result<Vec<ExchangeMap>, CoinmarketcapError> {
        let client = self.gate(Endpoint::ExchangeMap)?;
        validation::validate_pagination(start, limit)?;
        let query = MapQuery {
            pagination: Pagination::new(start, limit),
            listing_status: None,
        };
        Ok(client.get_exchange_map(&query).await?)
    }

    /// Not offered; always fails with [`CoinmarketcapError::Unsupported`].
    pub async fn get_exchange_historical_listings(
        &self,
    ) -> Result<Vec<ExchangeQuote>, CoinmarketcapError> {
        Err(CoinmarketcapError::Unsupported(
            Endpoint::ExchangeListingsHistorical,
        ))
    }

    /// Not offered; always fails with [`CoinmarketcapError::Unsupported`].
    pub async fn get_exchange_latest_listings(
        &self,
    ) -> Result<Vec<ExchangeQuote>, CoinmarketcapError> {
        Err(CoinmarketcapError::Unsupported(Endpoint::ExchangeListingsLatest))
    }

    /// Active market pairs listed on an exchange.
    pub async fn get_exchange_latest_market_pairs(
        &self,
        id: i64,
        start: i64,
        limit: i64,
    ) -> Result<ExchangeMarketPairs, CoinmarketcapError> {
        let client = self.gate(Endpoint::ExchangeMarketPairsLatest)?;
        let id = validation::validate_id(id)?;
        validation::validate_pagination(start, limit)?;
        let query = MarketPairsQuery {
            id,
            pagination: Pagination::new(start, limit),
            convert: self.convert.clone(),
        };
        Ok(client.get_exchange_market_pairs_latest(&query).await?)
    }

    /// Latest volume quotes for the given exchange ids, keyed by id.
    pub async fn get_exchange_latest_quotes(
        &self,
        ids: &[i64],
    ) -> Result<HashMap<String, ExchangeQuote>, CoinmarketcapError> {
        let client = self.gate(Endpoint::ExchangeQuotesLatest)?;
        let ids = validation::validate_ids(ids)?;
        Ok(client
            .get_exchange_quotes_latest(&self.id_query(ids))
            .await?)
    }

    /// Historical volume quotes for an exchange.
    pub async fn get_exchange_historical_quotes(
        &self,
        id: i64,
        time_start: Option<DateTime<Utc>>,
        time_end: Option<DateTime<Utc>>,
    ) -> Result<ExchangeHistoricalQuotes, CoinmarketcapError> {
        let client = self.gate(Endpoint::ExchangeQuotesHistorical)?;
        let id = validation::validate_id(id)?;
        validation::validate_time_range(time_start, time_end)?;
        let query = self.historical_query(Some(id), time_start, time_end);
        Ok(client.get_exchange_quotes_historical(&query).await?)
    }

    /// Latest aggregate market metrics.
    pub async fn get_global_metric_latest_quotes(
        &self,
    ) -> Result<GlobalMetrics, CoinmarketcapError> {
        let client = self.gate(Endpoint::GlobalMetricsQuotesLatest)?;
        let query = ConvertQuery {
            convert: self.convert.clone(),
        };
        Ok(client.get_global_metrics_quotes_latest(&query).await?)
    }

    /// Historical aggregate market metrics.
    pub async fn get_global_metric_historical_quotes(
        &self,
        time_start: Option<DateTime<Utc>>,
        time_end: Option<DateTime<Utc>>,
    ) -> Result<GlobalMetricsHistorical, CoinmarketcapError> {
        let client = self.gate(Endpoint::GlobalMetricsQuotesHistorical)?;
        validation::validate_time_range(time_start, time_end)?;
        let query = self.historical_query(None, time_start, time_end);
        Ok(client.get_global_metrics_quotes_historical(&query).await?)
    }

    /// Converts `amount` of cryptocurrency `id`, optionally at a historical time.
    pub async fn get_price_conversion(
        &self,
        amount: f64,
        id: i64,
        at_time: Option<DateTime<Utc>>,
    ) -> Result<PriceConversion, CoinmarketcapError> {
        let client = self.gate(Endpoint::PriceConversion)?;
        let amount = validation::validate_amount(amount)?;
        let id = validation::validate_id(id)?;
        let query = PriceConversionQuery {
            amount,
            id,
            time: at_time,
            convert: self.convert.clone(),
        };
        Ok(client.get_price_conversion(&query).await?)
    }
}
