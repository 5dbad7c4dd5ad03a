use chrono::{DateTime, Utc};
use url::Url;

use crate::Error;

use super::common::{Order, Query};
use super::filter::{Comparator, RangeFilter};

/// Query for the ticker news endpoint (`/v2/reference/news`).
#[derive(Clone, Default)]
pub struct TickerNewsQuery {
    /// Return articles mentioning this ticker.
    pub ticker: RangeFilter<String>,
    /// Return articles published on, before, or after this instant.
    /// Encoded as a millisecond epoch in the query string.
    pub published_utc: RangeFilter<DateTime<Utc>>,
    /// Field to sort results on.
    pub sort: Option<NewsSortBy>,
    /// Sort order.
    pub order: Option<Order>,
    /// Maximum number of results, default 10, max 1000.
    pub limit: Option<i64>,
}

impl Query for TickerNewsQuery {
    fn path(&self) -> Result<String, Error> {
        Ok("/v2/reference/news".to_string())
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let url = self.ticker.add_to_url(url, "ticker");
        let mut url = self.published_utc.add_to_url(&url, "published_utc");
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

impl TickerNewsQuery {
    /// Filters by mentioned ticker under the given comparator.
    pub fn with_ticker(mut self, comparator: Comparator, ticker: &str) -> Self {
        self.ticker.set(comparator, ticker.to_string());
        self
    }

    /// Filters by publication instant under the given comparator.
    pub fn with_published_utc(
        mut self,
        comparator: Comparator,
        published_utc: DateTime<Utc>,
    ) -> Self {
        self.published_utc.set(comparator, published_utc);
        self
    }

    pub fn with_sort(mut self, sort: NewsSortBy) -> Self {
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

/// Sort field for the ticker news endpoint.
#[derive(Clone, Copy)]
pub enum NewsSortBy {
    PublishedUtc,
}

impl std::fmt::Display for NewsSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                NewsSortBy::PublishedUtc => "published_utc",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use url::Url;

    use crate::query::{Comparator, Query, TickerNewsQuery};

    #[test]
    fn published_utc_encodes_as_millisecond_epoch() {
        let url = Url::parse("https://example.com").unwrap();
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let url = TickerNewsQuery::default()
            .with_published_utc(Comparator::GreaterThan, ts)
            .add_to_url(&url);
        let query = url.query().unwrap();
        assert!(query.contains(&format!(
            "published_utc.gt={}",
            ts.timestamp_millis()
        )));
    }
}
