use url::Url;

use super::{
    common::{append_convert, append_ids},
    Query,
};

/// Query addressing one or more resources by CoinMarketCap id.
#[derive(Clone, Debug, Default)]
pub struct IdQuery {
    pub ids: Vec<i64>,
    pub convert: Vec<String>,
}

impl Query for IdQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        append_ids(&mut url, "id", &self.ids);
        append_convert(&mut url, &self.convert);
        url
    }
}

impl IdQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.ids.push(id);
        self
    }
    pub fn with_ids(mut self, ids: &[i64]) -> Self {
        self.ids.extend_from_slice(ids);
        self
    }

    pub fn with_convert(mut self, symbol: &str) -> Self {
        self.convert.push(symbol.to_string());
        self
    }
}

/// Query carrying only the `convert` currency list.
#[derive(Clone, Debug, Default)]
pub struct ConvertQuery {
    pub convert: Vec<String>,
}

impl Query for ConvertQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        append_convert(&mut url, &self.convert);
        url
    }
}

impl ConvertQuery {
    pub fn with_convert(mut self, symbol: &str) -> Self {
        self.convert.push(symbol.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{ConvertQuery, IdQuery, Query};

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_id_query_joins_ids() {
        let url = Url::parse("https://example.com/v1/cryptocurrency/info").unwrap();
        let url = IdQuery::default()
            .with_id(1)
            .with_ids(&[1027, 825])
            .with_convert("EUR")
            .add_to_url(&url);

        assert_eq!(
            pairs(&url),
            vec![
                ("id".to_string(), "1,1027,825".to_string()),
                ("convert".to_string(), "EUR".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_id_query_leaves_url_untouched() {
        let url = Url::parse("https://example.com/v1/cryptocurrency/info").unwrap();
        let out = IdQuery::default().add_to_url(&url);
        assert_eq!(out.as_str(), url.as_str());
    }

    #[test]
    fn test_convert_query_joins_symbols() {
        let url = Url::parse("https://example.com").unwrap();
        let url = ConvertQuery::default()
            .with_convert("USD")
            .with_convert("BTC")
            .add_to_url(&url);
        assert_eq!(
            pairs(&url),
            vec![("convert".to_string(), "USD,BTC".to_string())]
        );
    }
}
