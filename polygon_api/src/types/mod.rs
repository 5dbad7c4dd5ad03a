mod response;
pub use self::response::{ListResponse, Response};

mod ticker;
pub use self::ticker::{AssetClass, Branding, CompanyAddress, MarketLocale, Ticker, TickerType};

mod news;
pub use self::news::{NewsArticle, Publisher};

mod options;
pub use self::options::{AdditionalUnderlying, ContractType, OptionContract};
