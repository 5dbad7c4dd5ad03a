use chrono::NaiveDate;
use url::Url;

use crate::types::{AssetClass, MarketLocale};
use crate::Error;

use super::common::{Order, Query};
use super::filter::{Comparator, RangeFilter};

/// Query for the list-tickers endpoint (`/v3/reference/tickers`).
#[derive(Clone, Default)]
pub struct TickersQuery {
    /// Ticker symbol filter. Leave empty to query all tickers.
    pub ticker: RangeFilter<String>,
    /// Ticker type code. Find supported codes via the ticker types endpoint.
    pub ticker_type: Option<String>,
    /// Restrict results to one market/asset class.
    pub market: Option<AssetClass>,
    /// Primary exchange of the asset, as an ISO code.
    pub exchange: Option<i64>,
    /// CUSIP code to search for. The API never returns CUSIPs in responses.
    pub cusip: Option<i64>,
    /// SEC Central Index Key to search for.
    pub cik: Option<i64>,
    /// Point in time to retrieve tickers available on that date. Defaults
    /// to the most recent available date.
    pub date: Option<NaiveDate>,
    /// Whether returned tickers must be actively traded on the queried date.
    pub active: Option<bool>,
    /// Search terms within the ticker and/or company name.
    pub search: Option<String>,
    /// Field to sort results on. Ignored when `search` is present.
    pub sort: Option<TickerSortBy>,
    /// Sort order.
    pub order: Option<Order>,
    /// Maximum number of results, default 100, max 1000.
    pub limit: Option<i64>,
}

impl Query for TickersQuery {
    fn path(&self) -> Result<String, Error> {
        Ok("/v3/reference/tickers".to_string())
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.ticker.add_to_url(url, "ticker");
        if let Some(ticker_type) = &self.ticker_type {
            url.query_pairs_mut()
                .append_pair("type", ticker_type.as_str());
        }
        if let Some(market) = self.market {
            url.query_pairs_mut()
                .append_pair("market", &market.to_string());
        }
        if let Some(exchange) = self.exchange {
            url.query_pairs_mut()
                .append_pair("exchange", &exchange.to_string());
        }
        if let Some(cusip) = self.cusip {
            url.query_pairs_mut()
                .append_pair("cusip", &cusip.to_string());
        }
        if let Some(cik) = self.cik {
            url.query_pairs_mut().append_pair("cik", &cik.to_string());
        }
        if let Some(date) = self.date {
            url.query_pairs_mut()
                .append_pair("date", &date.format("%Y-%m-%d").to_string());
        }
        if let Some(active) = self.active {
            url.query_pairs_mut()
                .append_pair("active", &active.to_string());
        }
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        if let Some(sort) = self.sort {
            url.query_pairs_mut().append_pair("sort", &sort.to_string());
        }
        if let Some(order) = self.order {
            url.query_pairs_mut()
                .append_pair("order", &order.to_string());
        }
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        url
    }
}

impl TickersQuery {
    /// Filters by ticker symbol under the given comparator. Each comparator
    /// occupies its own slot, so a range is expressed by chaining two calls.
    pub fn with_ticker(mut self, comparator: Comparator, ticker: &str) -> Self {
        self.ticker.set(comparator, ticker.to_string());
        self
    }

    pub fn with_type(mut self, ticker_type: &str) -> Self {
        self.ticker_type = Some(ticker_type.to_string());
        self
    }

    pub fn with_market(mut self, market: AssetClass) -> Self {
        self.market = Some(market);
        self
    }

    pub fn with_exchange(mut self, exchange: i64) -> Self {
        self.exchange = Some(exchange);
        self
    }

    pub fn with_cusip(mut self, cusip: i64) -> Self {
        self.cusip = Some(cusip);
        self
    }

    pub fn with_cik(mut self, cik: i64) -> Self {
        self.cik = Some(cik);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_sort(mut self, sort: TickerSortBy) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Sort field for the list-tickers endpoint.
#[derive(Clone, Copy)]
pub enum TickerSortBy {
    Ticker,
    Name,
    Market,
    Locale,
    PrimaryExchange,
    Type,
    CurrencyName,
    Cik,
    CompositeFigi,
    ShareClassFigi,
    LastUpdatedUtc,
    DelistedUtc,
}

impl std::fmt::Display for TickerSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TickerSortBy::Ticker => "ticker",
                TickerSortBy::Name => "name",
                TickerSortBy::Market => "market",
                TickerSortBy::Locale => "locale",
                TickerSortBy::PrimaryExchange => "primary_exchange",
                TickerSortBy::Type => "type",
                TickerSortBy::CurrencyName => "currency_name",
                TickerSortBy::Cik => "cik",
                TickerSortBy::CompositeFigi => "composite_figi",
                TickerSortBy::ShareClassFigi => "share_class_figi",
                TickerSortBy::LastUpdatedUtc => "last_updated_utc",
                TickerSortBy::DelistedUtc => "delisted_utc",
            }
        )
    }
}

/// Query for the ticker details endpoint (`/v3/reference/tickers/{ticker}`).
#[derive(Clone, Default)]
pub struct TickerDetailsQuery {
    /// Ticker symbol of the asset. Required; substituted into the URL path.
    pub ticker: String,
    /// Point in time to get information about the ticker available on that
    /// date. Defaults to the most recent available date.
    pub date: Option<NaiveDate>,
}

impl TickerDetailsQuery {
    pub fn new(ticker: &str) -> Self {
        TickerDetailsQuery {
            ticker: ticker.to_string(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

impl Query for TickerDetailsQuery {
    fn path(&self) -> Result<String, Error> {
        if self.ticker.is_empty() {
            return Err(Error::MissingParameter { name: "ticker" });
        }
        Ok(format!("/v3/reference/tickers/{}", self.ticker))
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(date) = self.date {
            url.query_pairs_mut()
                .append_pair("date", &date.format("%Y-%m-%d").to_string());
        }
        url
    }
}

/// Query for the ticker types endpoint (`/v3/reference/tickers/types`).
#[derive(Clone, Default)]
pub struct TickerTypesQuery {
    /// Filter by asset class.
    pub asset_class: Option<AssetClass>,
    /// Filter by locale.
    pub locale: Option<MarketLocale>,
}

impl TickerTypesQuery {
    pub fn with_asset_class(mut self, asset_class: AssetClass) -> Self {
        self.asset_class = Some(asset_class);
        self
    }

    pub fn with_locale(mut self, locale: MarketLocale) -> Self {
        self.locale = Some(locale);
        self
    }
}

impl Query for TickerTypesQuery {
    fn path(&self) -> Result<String, Error> {
        Ok("/v3/reference/tickers/types".to_string())
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(asset_class) = self.asset_class {
            url.query_pairs_mut()
                .append_pair("asset_class", &asset_class.to_string());
        }
        if let Some(locale) = self.locale {
            url.query_pairs_mut()
                .append_pair("locale", &locale.to_string());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{Comparator, Query, TickerDetailsQuery, TickersQuery};
    use crate::Error;

    #[test]
    fn ticker_range_occupies_two_slots() {
        let url = Url::parse("https://example.com").unwrap();
        let url = TickersQuery::default()
            .with_ticker(Comparator::GreaterOrEqual, "A")
            .with_ticker(Comparator::LessThan, "M")
            .add_to_url(&url);
        let query = url.query().unwrap();
        assert!(query.contains("ticker.gte=A"));
        assert!(query.contains("ticker.lt=M"));
    }

    #[test]
    fn details_path_requires_ticker() {
        assert!(matches!(
            TickerDetailsQuery::default().path(),
            Err(Error::MissingParameter { name: "ticker" })
        ));
        assert_eq!(
            TickerDetailsQuery::new("AAPL").path().unwrap(),
            "/v3/reference/tickers/AAPL"
        );
    }
}
