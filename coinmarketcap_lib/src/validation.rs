//! Argument checks run before a request is built.

use chrono::{DateTime, Utc};

use crate::error::CoinmarketcapError;

/// Largest page the listing endpoints accept.
pub const MAX_LIMIT: i64 = 5000;

/// Validates a single CoinMarketCap id.
pub fn validate_id(id: i64) -> Result<i64, CoinmarketcapError> {
    if id <= 0 {
        return Err(CoinmarketcapError::InvalidInput(format!(
            "id must be positive, got {}",
            id
        )));
    }
    Ok(id)
}

/// Validates a non-empty list of ids.
pub fn validate_ids(ids: &[i64]) -> Result<Vec<i64>, CoinmarketcapError> {
    if ids.is_empty() {
        return Err(CoinmarketcapError::InvalidInput(
            "at least one id is required".to_string(),
        ));
    }
    ids.iter().map(|id| validate_id(*id)).collect()
}

/// Validates `start` / `limit`. Zero means "use the API default".
pub fn validate_pagination(start: i64, limit: i64) -> Result<(), CoinmarketcapError> {
    if start < 0 {
        return Err(CoinmarketcapError::InvalidInput(format!(
            "start must not be negative, got {}",
            start
        )));
    }
    if !(0..=MAX_LIMIT).contains(&limit) {
        return Err(CoinmarketcapError::InvalidInput(format!(
            "limit must be between 0 and {}, got {}",
            MAX_LIMIT, limit
        )));
    }
    Ok(())
}

/// Rejects ranges whose start lies after their end.
pub fn validate_time_range(
    time_start: Option<DateTime<Utc>>,
    time_end: Option<DateTime<Utc>>,
) -> Result<(), CoinmarketcapError> {
    if let (Some(start), Some(end)) = (time_start, time_end) {
        if start > end {
            return Err(CoinmarketcapError::InvalidInput(format!(
                "time_start {} is after time_end {}",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }
    }
    Ok(())
}

/// Validates a conversion amount.
pub fn validate_amount(amount: f64) -> Result<f64, CoinmarketcapError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(CoinmarketcapError::InvalidInput(format!(
            "amount must be a finite, non-negative number, got {}",
            amount
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    #[test]
    fn ids_must_be_positive_and_present() {
        assert_eq!(validate_ids(&[1, 1027]).unwrap(), vec![1, 1027]);
        assert!(validate_ids(&[]).is_err());
        assert!(validate_ids(&[1, 0]).is_err());
        assert!(validate_id(-3).is_err());
    }

    #[test]
    fn pagination_bounds() {
        assert!(validate_pagination(0, 0).is_ok());
        assert!(validate_pagination(1, MAX_LIMIT).is_ok());
        assert!(validate_pagination(-1, 10).is_err());
        assert!(validate_pagination(1, MAX_LIMIT + 1).is_err());
        assert!(validate_pagination(1, -5).is_err());
    }

    #[test]
    fn time_range_order() {
        let now = Utc::now();
        let earlier = now - Duration::hours(1);
        assert!(validate_time_range(Some(earlier), Some(now)).is_ok());
        assert!(validate_time_range(Some(now), Some(now)).is_ok());
        assert!(validate_time_range(Some(now), None).is_ok());
        assert!(validate_time_range(Some(now), Some(earlier)).is_err());
    }

    #[test]
    fn amount_must_be_finite() {
        assert_eq!(validate_amount(0.0).unwrap(), 0.0);
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
        assert!(validate_amount(-1.0).is_err());
    }
}
