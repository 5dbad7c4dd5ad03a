mod common;
pub use self::common::{Order, Query};

mod filter;
pub use self::filter::{Comparator, FilterValue, RangeFilter};

mod tickers;
pub use self::tickers::{TickerDetailsQuery, TickerSortBy, TickerTypesQuery, TickersQuery};

mod news;
pub use self::news::{NewsSortBy, TickerNewsQuery};

mod options;
pub use self::options::{OptionContractQuery, OptionContractsQuery};
