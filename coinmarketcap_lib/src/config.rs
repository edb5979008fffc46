//! Client settings, loaded from a YAML file and overlaid with environment variables.
//!
//! The file layout nests the client section under `currency.coinmarketcap`,
//! optionally wrapped in a `gocrypto` root:
//!
//! ```yaml
//! currency:
//!   coinmarketcap:
//!     apikey: "..."
//!     apiAccountPlanLevel: basic
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::error::CoinmarketcapError;
use crate::plan::AccountPlan;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "COINMARKETCAP_API_KEY";
/// Environment variable holding the account plan name.
pub const ENV_ACCOUNT_PLAN: &str = "COINMARKETCAP_ACCOUNT_PLAN";
/// Environment variable selecting the sandbox host (`1` / `true`).
pub const ENV_SANDBOX: &str = "COINMARKETCAP_SANDBOX";
/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "COINMARKETCAP_BASE_URL";

/// Error types for configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("Config has no currency.coinmarketcap section")]
    MissingSection,
}

/// Settings consumed by [`crate::Coinmarketcap::setup`].
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub name: String,
    pub enabled: bool,
    pub verbose: bool,
    pub api_key: String,
    /// Plan name as configured. Empty means unset; [`Settings::plan`] reads it as basic.
    pub account_plan: String,
    /// Target the sandbox host instead of production.
    pub sandbox: bool,
    /// Explicit base URL; wins over `sandbox`.
    pub base_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: "CoinMarketCap".to_string(),
            enabled: false,
            verbose: false,
            api_key: String::new(),
            account_plan: String::new(),
            sandbox: false,
            base_url: None,
        }
    }
}

impl Settings {
    /// Default settings overlaid with the `COINMARKETCAP_*` environment variables.
    pub fn from_env() -> Self {
        Settings::default().apply_env()
    }

    /// Overlays the `COINMARKETCAP_*` environment variables onto these settings.
    pub fn apply_env(self) -> Self {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Overlays variables from `lookup`. A non-empty API key also enables the client.
    pub fn apply_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.api_key = key;
            self.enabled = true;
        }
        if let Some(plan) = lookup(ENV_ACCOUNT_PLAN).filter(|v| !v.trim().is_empty()) {
            self.account_plan = plan;
        }
        if let Some(sandbox) = lookup(ENV_SANDBOX) {
            self.sandbox = parse_bool(&sandbox);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = Some(base_url);
        }
        self
    }

    /// True when both an API key and an account plan are configured.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.account_plan.trim().is_empty()
    }

    /// The configured plan, or [`AccountPlan::Basic`] when none is set.
    pub fn plan(&self) -> Result<AccountPlan, CoinmarketcapError> {
        if self.account_plan.trim().is_empty() {
            return Ok(AccountPlan::default());
        }
        self.account_plan.parse()
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Top-level structure of the YAML config file.
#[derive(Deserialize, Debug, Default)]
struct ConfigFile {
    #[serde(default)]
    currency: Option<CurrencySection>,
    #[serde(default)]
    gocrypto: Option<RootSection>,
}

#[derive(Deserialize, Debug, Default)]
struct RootSection {
    #[serde(default)]
    currency: Option<CurrencySection>,
}

#[derive(Deserialize, Debug, Default)]
struct CurrencySection {
    coinmarketcap: Option<CoinmarketcapSection>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CoinmarketcapSection {
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default)]
    verbose: bool,
    #[serde(default, rename = "apikey", alias = "apiKey")]
    api_key: Option<String>,
    #[serde(default, rename = "apiAccountPlanLevel")]
    account_plan: Option<String>,
    #[serde(default)]
    sandbox: bool,
    #[serde(default)]
    base_url: Option<String>,
}

fn default_enabled() -> bool {
    true
}

/// Parse settings from YAML content.
pub fn parse_config(yaml_content: &str) -> Result<Settings, ConfigError> {
    let file: ConfigFile = serde_yml::from_str(yaml_content)?;
    let section = file
        .currency
        .or_else(|| file.gocrypto.and_then(|root| root.currency))
        .and_then(|c| c.coinmarketcap)
        .ok_or(ConfigError::MissingSection)?;

    let defaults = Settings::default();
    Ok(Settings {
        name: defaults.name,
        enabled: section.enabled,
        verbose: section.verbose,
        api_key: section.api_key.unwrap_or_default(),
        account_plan: section.account_plan.unwrap_or_default(),
        sandbox: section.sandbox,
        base_url: section.base_url.filter(|u| !u.trim().is_empty()),
    })
}

/// Load settings from a YAML file on disk.
pub fn load_config(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let yaml_content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&yaml_content)
}
