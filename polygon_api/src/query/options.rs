use chrono::NaiveDate;
use url::Url;

use crate::types::ContractType;
use crate::Error;

use super::common::Query;
use super::filter::{Comparator, RangeFilter};

/// Query for the options contracts endpoint
/// (`/v3/reference/options/contracts`).
#[derive(Clone, Default)]
pub struct OptionContractsQuery {
    /// Underlying ticker symbol filter.
    pub underlying_ticker: RangeFilter<String>,
    /// Contract type (call, put, or other).
    pub contract_type: Option<ContractType>,
    /// Expiration date filter.
    pub expiration_date: RangeFilter<NaiveDate>,
    /// Strike price filter.
    pub strike_price: RangeFilter<f64>,
    /// Point in time for the contract listing. Defaults to today.
    pub as_of: Option<NaiveDate>,
    /// Whether to include expired contracts.
    pub expired: Option<bool>,
}

impl Query for OptionContractsQuery {
    fn path(&self) -> Result<String, Error> {
        Ok("/v3/reference/options/contracts".to_string())
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let url = self.underlying_ticker.add_to_url(url, "underlying_ticker");
        let url = self.expiration_date.add_to_url(&url, "expiration_date");
        let mut url = self.strike_price.add_to_url(&url, "strike_price");
        if let Some(contract_type) = self.contract_type {
            url.query_pairs_mut()
                .append_pair("contract_type", &contract_type.to_string());
        }
        if let Some(as_of) = self.as_of {
            url.query_pairs_mut()
                .append_pair("as_of", &as_of.format("%Y-%m-%d").to_string());
        }
        if let Some(expired) = self.expired {
            url.query_pairs_mut()
                .append_pair("expired", &expired.to_string());
        }
        url
    }
}

impl OptionContractsQuery {
    /// Filters by underlying ticker under the given comparator.
    pub fn with_underlying_ticker(mut self, comparator: Comparator, ticker: &str) -> Self {
        self.underlying_ticker.set(comparator, ticker.to_string());
        self
    }

    pub fn with_contract_type(mut self, contract_type: ContractType) -> Self {
        self.contract_type = Some(contract_type);
        self
    }

    /// Filters by expiration date under the given comparator.
    pub fn with_expiration_date(mut self, comparator: Comparator, date: NaiveDate) -> Self {
        self.expiration_date.set(comparator, date);
        self
    }

    /// Filters by strike price under the given comparator.
    pub fn with_strike_price(mut self, comparator: Comparator, strike_price: f64) -> Self {
        self.strike_price.set(comparator, strike_price);
        self
    }

    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn with_expired(mut self, expired: bool) -> Self {
        self.expired = Some(expired);
        self
    }
}

/// Query for the option contract details endpoint
/// (`/v3/reference/options/contracts/{options_ticker}`).
#[derive(Clone, Default)]
pub struct OptionContractQuery {
    /// Option ticker symbol, e.g. `O:AAPL250117C00150000`. Required;
    /// substituted into the URL path.
    pub option_ticker: String,
    /// Point in time for the contract. Defaults to today.
    pub as_of: Option<NaiveDate>,
}

impl OptionContractQuery {
    pub fn new(option_ticker: &str) -> Self {
        OptionContractQuery {
            option_ticker: option_ticker.to_string(),
            as_of: None,
        }
    }

    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }
}

impl Query for OptionContractQuery {
    fn path(&self) -> Result<String, Error> {
        if self.option_ticker.is_empty() {
            return Err(Error::MissingParameter {
                name: "options_ticker",
            });
        }
        Ok(format!(
            "/v3/reference/options/contracts/{}",
            self.option_ticker
        ))
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(as_of) = self.as_of {
            url.query_pairs_mut()
                .append_pair("as_of", &as_of.format("%Y-%m-%d").to_string());
        }
        url
    }
}
