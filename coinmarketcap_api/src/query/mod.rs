mod common;
pub use self::common::{Paginated, Pagination, Query, SortDirection};

mod id;
pub use self::id::{ConvertQuery, IdQuery};

mod listing;
pub use self::listing::{ListingQuery, ListingSort, ListingStatus, MapQuery, MarketPairsQuery};

mod historical;
pub use self::historical::{HistoricalQuery, PriceConversionQuery};
