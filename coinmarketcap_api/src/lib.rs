mod client;
mod endpoint;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, PRODUCTION_API_URL, SANDBOX_API_URL};
pub use self::endpoint::Endpoint;
pub use self::errors::Error;
pub use self::query::{
    ConvertQuery, HistoricalQuery, IdQuery, ListingQuery, ListingSort, ListingStatus, MapQuery,
    MarketPairsQuery, Paginated, Pagination, PriceConversionQuery, Query, SortDirection,
};
