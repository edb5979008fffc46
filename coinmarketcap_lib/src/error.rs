//! Error types for the library layer.

use std::fmt;

use coinmarketcap_api::Endpoint;

use crate::config::ConfigError;
use crate::plan::AccountPlan;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding plan gating, configuration and input validation failures.
#[derive(Debug)]
pub enum CoinmarketcapError {
    /// An error from the underlying API client.
    Api(coinmarketcap_api::Error),
    /// The configured plan is below the tier the endpoint requires.
    PlanNotAllowed {
        required: AccountPlan,
        current: AccountPlan,
    },
    /// An account plan name that is not one of the known tiers.
    UnknownPlan(String),
    /// The endpoint is not offered by this client.
    Unsupported(Endpoint),
    /// The wrapper was set up with `enabled: false` or never set up.
    Disabled,
    /// No API key is configured.
    MissingApiKey,
    /// Loading or parsing configuration failed.
    Config(ConfigError),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for CoinmarketcapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::PlanNotAllowed { required, current } => write!(
                f,
                "Function use not allowed: requires the {} plan or higher, configured plan is {}",
                required, current
            ),
            Self::UnknownPlan(name) => write!(f, "Account plan {:?} not found", name),
            Self::Unsupported(endpoint) => {
                write!(f, "Endpoint {} is not yet available", endpoint)
            }
            Self::Disabled => write!(f, "CoinMarketCap client is not enabled"),
            Self::MissingApiKey => write!(f, "CoinMarketCap API key is not set"),
            Self::Config(e) => write!(f, "Configuration error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for CoinmarketcapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<coinmarketcap_api::Error> for CoinmarketcapError {
    fn from(e: coinmarketcap_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<ConfigError> for CoinmarketcapError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
