//! CoinMarketCap account plan tiers and the minimum tier each endpoint needs.

use std::fmt;
use std::str::FromStr;

use coinmarketcap_api::Endpoint;

use crate::error::CoinmarketcapError;

/// Subscription tier of the API key, ordered from least to most capable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountPlan {
    #[default]
    Basic,
    Startup,
    Hobbyist,
    Standard,
    Professional,
    Enterprise,
}

impl AccountPlan {
    /// Every tier in ascending order.
    pub const ALL: [AccountPlan; 6] = [
        AccountPlan::Basic,
        AccountPlan::Startup,
        AccountPlan::Hobbyist,
        AccountPlan::Standard,
        AccountPlan::Professional,
        AccountPlan::Enterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountPlan::Basic => "basic",
            AccountPlan::Startup => "startup",
            AccountPlan::Hobbyist => "hobbyist",
            AccountPlan::Standard => "standard",
            AccountPlan::Professional => "professional",
            AccountPlan::Enterprise => "enterprise",
        }
    }

    /// Returns an error unless this plan is at least `min_required`.
    pub fn check(self, min_required: AccountPlan) -> Result<(), CoinmarketcapError> {
        if self < min_required {
            return Err(CoinmarketcapError::PlanNotAllowed {
                required: min_required,
                current: self,
            });
        }
        Ok(())
    }

    /// Whether this plan may call `endpoint`.
    pub fn allows(self, endpoint: Endpoint) -> bool {
        self >= required_plan(endpoint)
    }
}

impl fmt::Display for AccountPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountPlan {
    type Err = CoinmarketcapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(AccountPlan::Basic),
            "startup" => Ok(AccountPlan::Startup),
            "hobbyist" => Ok(AccountPlan::Hobbyist),
            "standard" => Ok(AccountPlan::Standard),
            "professional" => Ok(AccountPlan::Professional),
            "enterprise" => Ok(AccountPlan::Enterprise),
            _ => Err(CoinmarketcapError::UnknownPlan(s.to_string())),
        }
    }
}

/// Minimum account plan required to call `endpoint`.
pub fn required_plan(endpoint: Endpoint) -> AccountPlan {
    match endpoint {
        Endpoint::CryptocurrencyInfo
        | Endpoint::CryptocurrencyMap
        | Endpoint::CryptocurrencyListingsLatest
        | Endpoint::CryptocurrencyQuotesLatest
        | Endpoint::GlobalMetricsQuotesLatest => AccountPlan::Basic,
        Endpoint::CryptocurrencyOhlcvLatest | Endpoint::ExchangeInfo | Endpoint::ExchangeMap => {
            AccountPlan::Startup
        }
        Endpoint::PriceConversion => AccountPlan::Hobbyist,
        Endpoint::CryptocurrencyListingsHistorical
        | Endpoint::CryptocurrencyMarketPairsLatest
        | Endpoint::CryptocurrencyOhlcvHistorical
        | Endpoint::CryptocurrencyQuotesHistorical
        | Endpoint::ExchangeListingsHistorical
        | Endpoint::ExchangeListingsLatest
        | Endpoint::ExchangeMarketPairsLatest
        | Endpoint::ExchangeQuotesLatest
        | Endpoint::ExchangeQuotesHistorical
        | Endpoint::GlobalMetricsQuotesHistorical => AccountPlan::Standard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_are_ordered() {
        for pair in AccountPlan::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn parse_all_plan_names() {
        let names = [
            "basic",
            "startup",
            "hobbyist",
            "standard",
            "professional",
            "enterprise",
        ];
        for (name, plan) in names.iter().zip(AccountPlan::ALL) {
            assert_eq!(name.parse::<AccountPlan>().unwrap(), plan);
            assert_eq!(plan.to_string(), *name);
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(
            " Professional ".parse::<AccountPlan>().unwrap(),
            AccountPlan::Professional
        );
        assert_eq!("BASIC".parse::<AccountPlan>().unwrap(), AccountPlan::Basic);
    }

    #[test]
    fn parse_unknown_plan_fails() {
        let err = "platinum".parse::<AccountPlan>().unwrap_err();
        assert!(matches!(err, CoinmarketcapError::UnknownPlan(ref p) if p == "platinum"));
        assert!("".parse::<AccountPlan>().is_err());
    }

    #[test]
    fn basic_plan_only_passes_basic() {
        let plan = AccountPlan::Basic;
        assert!(plan.check(AccountPlan::Basic).is_ok());
        for higher in &AccountPlan::ALL[1..] {
            let err = plan.check(*higher).unwrap_err();
            assert!(matches!(
                err,
                CoinmarketcapError::PlanNotAllowed { required, current: AccountPlan::Basic }
                    if required == *higher
            ));
        }
    }

    #[test]
    fn enterprise_passes_everything() {
        for plan in AccountPlan::ALL {
            assert!(AccountPlan::Enterprise.check(plan).is_ok());
        }
    }

    #[test]
    fn tier_table() {
        assert_eq!(required_plan(Endpoint::CryptocurrencyInfo), AccountPlan::Basic);
        assert_eq!(required_plan(Endpoint::GlobalMetricsQuotesLatest), AccountPlan::Basic);
        assert_eq!(required_plan(Endpoint::CryptocurrencyOhlcvLatest), AccountPlan::Startup);
        assert_eq!(required_plan(Endpoint::ExchangeMap), AccountPlan::Startup);
        assert_eq!(required_plan(Endpoint::PriceConversion), AccountPlan::Hobbyist);
        assert_eq!(
            required_plan(Endpoint::CryptocurrencyMarketPairsLatest),
            AccountPlan::Standard
        );
        assert_eq!(
            required_plan(Endpoint::GlobalMetricsQuotesHistorical),
            AccountPlan::Standard
        );
    }

    #[test]
    fn allows_follows_tier_table() {
        assert!(AccountPlan::Startup.allows(Endpoint::ExchangeInfo));
        assert!(!AccountPlan::Startup.allows(Endpoint::PriceConversion));
        assert!(AccountPlan::Hobbyist.allows(Endpoint::PriceConversion));
        assert!(!AccountPlan::Hobbyist.allows(Endpoint::ExchangeQuotesLatest));
    }
}
