use chrono::{DateTime, Utc};
use url::Url;

use super::{common::append_convert, Query};

/// Query for the time-ranged `historical` endpoints.
///
/// Times are sent as Unix seconds. Unset fields use the API defaults.
#[derive(Clone, Debug, Default)]
pub struct HistoricalQuery {
    pub id: Option<i64>,
    pub time_start: Option<DateTime<Utc>>,
    pub time_end: Option<DateTime<Utc>>,
    pub count: Option<i64>,
    pub interval: Option<String>,
    pub convert: Vec<String>,
}

impl Query for HistoricalQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(id) = self.id {
            url.query_pairs_mut().append_pair("id", &id.to_string());
        };
        if let Some(time_start) = self.time_start {
            url.query_pairs_mut()
                .append_pair("time_start", &time_start.timestamp().to_string());
        };
        if let Some(time_end) = self.time_end {
            url.query_pairs_mut()
                .append_pair("time_end", &time_end.timestamp().to_string());
        };
        if let Some(count) = self.count {
            url.query_pairs_mut()
                .append_pair("count", &count.to_string());
        };
        if let Some(interval) = &self.interval {
            url.query_pairs_mut()
                .append_pair("interval", interval.as_str());
        };
        append_convert(&mut url, &self.convert);
        url
    }
}

impl HistoricalQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_time_start(mut self, time_start: DateTime<Utc>) -> Self {
        self.time_start = Some(time_start);
        self
    }

    pub fn with_time_end(mut self, time_end: DateTime<Utc>) -> Self {
        self.time_end = Some(time_end);
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the sampling interval, e.g. `daily`, `hourly` or `5m`.
    pub fn with_interval(mut self, interval: &str) -> Self {
        self.interval = Some(interval.to_string());
        self
    }

    pub fn with_convert(mut self, symbol: &str) -> Self {
        self.convert.push(symbol.to_string());
        self
    }
}

/// Query for `tools/price-conversion`.
#[derive(Clone, Debug, Default)]
pub struct PriceConversionQuery {
    pub amount: f64,
    pub id: i64,
    /// Historical point in time to convert at. `None` converts at the latest price.
    pub time: Option<DateTime<Utc>>,
    pub convert: Vec<String>,
}

impl Query for PriceConversionQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("amount", &self.amount.to_string())
            .append_pair("id", &self.id.to_string());
        if let Some(time) = self.time {
            url.query_pairs_mut()
                .append_pair("time", &time.timestamp().to_string());
        };
        append_convert(&mut url, &self.convert);
        url
    }
}

impl PriceConversionQuery {
    pub fn new(amount: f64, id: i64) -> Self {
        Self {
            amount,
            id,
            ..Default::default()
        }
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_convert(mut self, symbol: &str) -> Self {
        self.convert.push(symbol.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use url::Url;

    use crate::query::{HistoricalQuery, PriceConversionQuery, Query};

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_historical_query_uses_unix_seconds() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let url = Url::parse("https://example.com").unwrap();
        let url = HistoricalQuery::default()
            .with_id(1)
            .with_time_start(start)
            .with_time_end(end)
            .with_interval("daily")
            .with_count(2)
            .add_to_url(&url);

        assert_eq!(
            pairs(&url),
            vec![
                ("id".to_string(), "1".to_string()),
                ("time_start".to_string(), "1704067200".to_string()),
                ("time_end".to_string(), "1704153600".to_string()),
                ("count".to_string(), "2".to_string()),
                ("interval".to_string(), "daily".to_string()),
            ]
        );
    }

    #[test]
    fn test_historical_query_without_id() {
        let url = Url::parse("https://example.com").unwrap();
        let url = HistoricalQuery::default()
            .with_convert("USD")
            .add_to_url(&url);
        assert_eq!(
            pairs(&url),
            vec![("convert".to_string(), "USD".to_string())]
        );
    }

    #[test]
    fn test_price_conversion_query() {
        let at = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let url = Url::parse("https://example.com").unwrap();
        let url = PriceConversionQuery::new(2.5, 1)
            .with_time(at)
            .with_convert("EUR")
            .add_to_url(&url);

        assert_eq!(
            pairs(&url),
            vec![
                ("amount".to_string(), "2.5".to_string()),
                ("id".to_string(), "1".to_string()),
                ("time".to_string(), "1718452800".to_string()),
                ("convert".to_string(), "EUR".to_string()),
            ]
        );
    }
}
