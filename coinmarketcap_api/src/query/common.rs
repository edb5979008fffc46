//! Shared query infrastructure: the [`Query`] and [`Paginated`] traits, [`Pagination`] and [`SortDirection`].

use std::str::FromStr;

use url::Url;

/// Trait implemented by all query builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Query builders that page through a listing with `start` / `limit`.
pub trait Paginated: Query {
    /// Returns a mutable reference to the pagination fields.
    fn get_pagination(&mut self) -> &mut Pagination;

    /// Sets the 1-based offset of the first result.
    fn with_start(mut self, start: i64) -> Self
    where
        Self: Sized,
    {
        self.get_pagination().start = Some(start);
        self
    }

    /// Sets the number of results to return.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.get_pagination().limit = Some(limit);
        self
    }
}

/// Sort order for listing results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    /// Descending order. This is the default.
    #[default]
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Offset and page size shared by listing endpoints.
///
/// Zero or absent values are left off the URL so the API defaults apply.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pagination {
    /// 1-based offset of the first result.
    pub start: Option<i64>,
    /// Number of results to return.
    pub limit: Option<i64>,
}

impl Pagination {
    /// Builds pagination from raw values, treating zero as "not set".
    pub fn new(start: i64, limit: i64) -> Self {
        Self {
            start: (start > 0).then_some(start),
            limit: (limit > 0).then_some(limit),
        }
    }

    /// Appends `start` and `limit` to the URL when they are positive.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(start) = self.start.filter(|s| *s > 0) {
            url.query_pairs_mut()
                .append_pair("start", &start.to_string());
        };
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        url
    }
}

/// Appends a comma-joined `convert` parameter when any symbols are given.
pub(crate) fn append_convert(url: &mut Url, convert: &[String]) {
    if !convert.is_empty() {
        url.query_pairs_mut()
            .append_pair("convert", convert.join(",").as_str());
    }
}

/// Appends a comma-joined list of numeric ids under `key`.
pub(crate) fn append_ids(url: &mut Url, key: &str, ids: &[i64]) {
    if !ids.is_empty() {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        url.query_pairs_mut().append_pair(key, joined.as_str());
    }
}
