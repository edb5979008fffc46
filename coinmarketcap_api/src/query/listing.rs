use std::str::FromStr;

use url::Url;

use super::{
    common::{append_convert, Pagination, SortDirection},
    Paginated, Query,
};

/// Query for the `map` endpoints (cryptocurrencies and exchanges).
#[derive(Clone, Debug, Default)]
pub struct MapQuery {
    pub pagination: Pagination,
    pub listing_status: Option<ListingStatus>,
}

impl Query for MapQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.pagination.add_to_url(url);
        if let Some(status) = self.listing_status {
            url.query_pairs_mut()
                .append_pair("listing_status", status.to_string().as_str());
        };
        url
    }
}

impl Paginated for MapQuery {
    fn get_pagination(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}

impl MapQuery {
    pub fn with_listing_status(mut self, status: ListingStatus) -> Self {
        self.listing_status = Some(status);
        self
    }
}

/// Query for `cryptocurrency/listings/latest`.
#[derive(Clone, Debug, Default)]
pub struct ListingQuery {
    pub pagination: Pagination,
    pub convert: Vec<String>,
    pub sort: Option<ListingSort>,
    pub sort_dir: Option<SortDirection>,
}

impl Query for ListingQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.pagination.add_to_url(url);
        append_convert(&mut url, &self.convert);
        if let Some(sort) = self.sort {
            url.query_pairs_mut()
                .append_pair("sort", sort.to_string().as_str());
        };
        if let Some(sort_dir) = self.sort_dir {
            url.query_pairs_mut()
                .append_pair("sort_dir", sort_dir.to_string().as_str());
        };
        url
    }
}

impl Paginated for ListingQuery {
    fn get_pagination(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}

impl ListingQuery {
    pub fn with_convert(mut self, symbol: &str) -> Self {
        self.convert.push(symbol.to_string());
        self
    }

    pub fn with_sort(mut self, sort: ListingSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_sort_direction(mut self, sort_dir: SortDirection) -> Self {
        self.sort_dir = Some(sort_dir);
        self
    }
}

/// Query for the `market-pairs/latest` endpoints.
#[derive(Clone, Debug, Default)]
pub struct MarketPairsQuery {
    pub id: i64,
    pub pagination: Pagination,
    pub convert: Vec<String>,
}

impl Query for MarketPairsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("id", &self.id.to_string());
        let mut url = self.pagination.add_to_url(&url);
        append_convert(&mut url, &self.convert);
        url
    }
}

impl Paginated for MarketPairsQuery {
    fn get_pagination(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}

impl MarketPairsQuery {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_convert(mut self, symbol: &str) -> Self {
        self.convert.push(symbol.to_string());
        self
    }
}

/// Which listings the `map` endpoints return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingStatus {
    Active,
    Inactive,
    Untracked,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ListingStatus::Active => "active",
                ListingStatus::Inactive => "inactive",
                ListingStatus::Untracked => "untracked",
            }
        )
    }
}

impl FromStr for ListingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ListingStatus::Active),
            "inactive" => Ok(ListingStatus::Inactive),
            "untracked" => Ok(ListingStatus::Untracked),
            _ => Err(()),
        }
    }
}

/// Sort field for `cryptocurrency/listings/latest`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingSort {
    #[default]
    MarketCap,
    Name,
    Symbol,
    DateAdded,
    Price,
    CirculatingSupply,
    TotalSupply,
    MaxSupply,
    NumMarketPairs,
    Volume24h,
    PercentChange1h,
    PercentChange24h,
    PercentChange7d,
}

impl std::fmt::Display for ListingSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ListingSort::MarketCap => "market_cap",
                ListingSort::Name => "name",
                ListingSort::Symbol => "symbol",
                ListingSort::DateAdded => "date_added",
                ListingSort::Price => "price",
                ListingSort::CirculatingSupply => "circulating_supply",
                ListingSort::TotalSupply => "total_supply",
                ListingSort::MaxSupply => "max_supply",
                ListingSort::NumMarketPairs => "num_market_pairs",
                ListingSort::Volume24h => "volume_24h",
                ListingSort::PercentChange1h => "percent_change_1h",
                ListingSort::PercentChange24h => "percent_change_24h",
                ListingSort::PercentChange7d => "percent_change_7d",
            }
        )?;
        Ok(())
    }
}

impl FromStr for ListingSort {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market_cap" => Ok(ListingSort::MarketCap),
            "name" => Ok(ListingSort::Name),
            "symbol" => Ok(ListingSort::Symbol),
            "date_added" => Ok(ListingSort::DateAdded),
            "price" => Ok(ListingSort::Price),
            "circulating_supply" => Ok(ListingSort::CirculatingSupply),
            "total_supply" => Ok(ListingSort::TotalSupply),
            "max_supply" => Ok(ListingSort::MaxSupply),
            "num_market_pairs" => Ok(ListingSort::NumMarketPairs),
            "volume_24h" => Ok(ListingSort::Volume24h),
            "percent_change_1h" => Ok(ListingSort::PercentChange1h),
            "percent_change_24h" => Ok(ListingSort::PercentChange24h),
            "percent_change_7d" => Ok(ListingSort::PercentChange7d),
            _ => Err(()),
        }
    }
}
