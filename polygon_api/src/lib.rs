mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    Comparator, FilterValue, NewsSortBy, OptionContractQuery, OptionContractsQuery, Order, Query,
    RangeFilter, TickerDetailsQuery, TickerNewsQuery, TickerSortBy, TickerTypesQuery, TickersQuery,
};
