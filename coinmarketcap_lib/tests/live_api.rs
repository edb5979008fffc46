//! Calls the real API when `resources/test/environment_test.yml` carries
//! credentials. Without them, or when the configured plan is below an
//! endpoint's tier, each call is expected to fail before any request is sent.

use chrono::{Duration, Utc};
use coinmarketcap_lib::{load_config, AccountPlan, Coinmarketcap, Settings};

const CONFIG_PATH: &str = "../resources/test/environment_test.yml";

fn load_settings() -> Option<Settings> {
    load_config(CONFIG_PATH).ok().map(Settings::apply_env)
}

/// True when credentials are configured and their plan covers `min_required`.
fn credentials_permit(min_required: AccountPlan) -> bool {
    let Some(settings) = load_settings() else {
        return false;
    };
    if !settings.enabled || !settings.has_credentials() {
        return false;
    }
    match settings.plan() {
        Ok(plan) if plan.check(min_required).is_ok() => true,
        Ok(plan) => {
            eprintln!(
                "coinmarketcap live tests: {} plan cannot test a {} endpoint",
                plan, min_required
            );
            false
        }
        Err(_) => false,
    }
}

fn live_client() -> Coinmarketcap {
    let mut c = Coinmarketcap::new();
    if let Some(settings) = load_settings() {
        let _ = c.setup(settings);
    }
    c
}

#[test]
fn template_config_parses() {
    assert!(load_config(CONFIG_PATH).is_ok());
}

#[tokio::test]
async fn cryptocurrency_info() {
    let result = live_client().get_cryptocurrency_info(&[1]).await;
    if credentials_permit(AccountPlan::Basic) {
        let info = result.unwrap();
        assert_eq!(info["1"].symbol, "BTC");
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn cryptocurrency_id_map() {
    let result = live_client().get_cryptocurrency_id_map().await;
    if credentials_permit(AccountPlan::Basic) {
        assert!(!result.unwrap().is_empty());
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn cryptocurrency_historical_listings_is_unavailable() {
    let result = live_client().get_cryptocurrency_historical_listings().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn cryptocurrency_latest_listing() {
    let result = live_client().get_cryptocurrency_latest_listing(0, 10).await;
    if credentials_permit(AccountPlan::Basic) {
        assert_eq!(result.unwrap().len(), 10);
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn cryptocurrency_latest_market_pairs() {
    let result = live_client()
        .get_cryptocurrency_latest_market_pairs(1, 0, 0)
        .await;
    if credentials_permit(AccountPlan::Standard) {
        assert_eq!(result.unwrap().id, 1);
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn cryptocurrency_ohlc_historical() {
    let end = Utc::now();
    let result = live_client()
        .get_cryptocurrency_ohlc_historical(1, Some(end - Duration::days(2)), Some(end))
        .await;
    if credentials_permit(AccountPlan::Standard) {
        assert!(result.is_ok(), "{:?}", result.err());
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn cryptocurrency_ohlc_latest() {
    let result = live_client().get_cryptocurrency_ohlc_latest(1).await;
    if credentials_permit(AccountPlan::Startup) {
        assert!(result.is_ok(), "{:?}", result.err());
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn cryptocurrency_latest_quotes() {
    let result = live_client().get_cryptocurrency_latest_quotes(&[1]).await;
    if credentials_permit(AccountPlan::Basic) {
        assert!(result.unwrap().contains_key("1"));
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn cryptocurrency_historical_quotes() {
    let end = Utc::now();
    let result = live_client()
        .get_cryptocurrency_historical_quotes(1, Some(end - Duration::days(1)), Some(end))
        .await;
    if credentials_permit(AccountPlan::Standard) {
        assert!(result.is_ok(), "{:?}", result.err());
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn exchange_info() {
    let result = live_client().get_exchange_info(&[270]).await;
    if credentials_permit(AccountPlan::Startup) {
        assert!(result.is_ok(), "{:?}", result.err());
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn exchange_map() {
    let result = live_client().get_exchange_map(0, 0).await;
    if credentials_permit(AccountPlan::Startup) {
        assert!(result.is_ok(), "{:?}", result.err());
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn exchange_listings_are_unavailable() {
    let c = live_client();
    assert!(c.get_exchange_historical_listings().await.is_err());
    assert!(c.get_exchange_latest_listings().await.is_err());
}

#[tokio::test]
async fn exchange_latest_market_pairs() {
    let result = live_client()
        .get_exchange_latest_market_pairs(270, 0, 0)
        .await;
    if credentials_permit(AccountPlan::Standard) {
        assert!(result.is_ok(), "{:?}", result.err());
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn exchange_latest_quotes() {
    let result = live_client().get_exchange_latest_quotes(&[270]).await;
    if credentials_permit(AccountPlan::Standard) {
        assert!(result.is_ok(), "{:?}", result.err());
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn exchange_historical_quotes() {
    let end = Utc::now();
    let result = live_client()
        .get_exchange_historical_quotes(270, Some(end - Duration::days(1)), Some(end))
        .await;
    if credentials_permit(AccountPlan::Standard) {
        assert!(result.is_ok(), "{:?}", result.err());
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn global_metric_latest_quotes() {
    let result = live_client().get_global_metric_latest_quotes().await;
    if credentials_permit(AccountPlan::Basic) {
        assert!(result.is_ok(), "{:?}", result.err());
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn global_metric_historical_quotes() {
    let end = Utc::now();
    let result = live_client()
        .get_global_metric_historical_quotes(Some(end - Duration::days(1)), Some(end))
        .await;
    if credentials_permit(AccountPlan::Standard) {
        assert!(result.is_ok(), "{:?}", result.err());
    } else {
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn price_conversion() {
    let result = live_client().get_price_conversion(1.0, 1, None).await;
    if credentials_permit(AccountPlan::Hobbyist) {
        assert!(result.is_ok(), "{:?}", result.err());
    } else {
        assert!(result.is_err());
    }
}
