//! Library layer for the CoinMarketCap client: account plans, settings and
//! the plan-gated [`Coinmarketcap`] wrapper.
//!
//! Wraps the `coinmarketcap_api` crate, refusing calls the configured
//! account plan cannot make before any request is sent.

pub mod client;
pub mod config;
pub mod error;
pub mod plan;
pub mod validation;

pub use coinmarketcap_api;
pub use coinmarketcap_api::types;
pub use coinmarketcap_api::Endpoint;

pub use client::Coinmarketcap;
pub use config::{load_config, parse_config, ConfigError, Settings};
pub use error::CoinmarketcapError;
pub use plan::{required_plan, AccountPlan};
