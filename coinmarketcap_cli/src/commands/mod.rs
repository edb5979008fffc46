//! CLI subcommand implementations.

pub mod convert;
pub mod crypto;
pub mod exchange;
pub mod global;
pub mod plan;

use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;

/// Pagination shared by the list subcommands. Zero uses the API default.
#[derive(Args)]
pub struct PageArgs {
    /// 1-based offset of the first result
    #[arg(long, default_value = "0")]
    pub start: i64,

    /// Number of results
    #[arg(long, default_value = "20")]
    pub limit: i64,
}

/// Market pairs of one cryptocurrency or exchange.
#[derive(Args)]
pub struct PairsArgs {
    /// CoinMarketCap id
    #[arg(long)]
    pub id: i64,

    #[command(flatten)]
    pub page: PageArgs,
}

/// Time-ranged history of one cryptocurrency or exchange.
#[derive(Args)]
pub struct HistoryArgs {
    /// CoinMarketCap id
    #[arg(long)]
    pub id: i64,

    /// Range start, YYYY-MM-DD or RFC 3339
    #[arg(long, value_parser = parse_time)]
    pub start: Option<DateTime<Utc>>,

    /// Range end, YYYY-MM-DD or RFC 3339
    #[arg(long, value_parser = parse_time)]
    pub end: Option<DateTime<Utc>>,
}

/// Parses `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
pub fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .ok_or_else(|| format!("invalid date: {}", s));
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid time {:?}: {}", s, e))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_date() {
        let t = parse_time("2024-06-14").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2024, 6, 14, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let t = parse_time("2024-06-14T02:00:00+02:00").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2024, 6, 14, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_time("yesterday").is_err());
        assert!(parse_time("2024-13-01").is_err());
    }
}
