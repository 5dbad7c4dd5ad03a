//! Ticker reference types: tickers, ticker types, and the markets they
//! trade in.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Detailed information on a ticker symbol.
///
/// Every field is optional on the wire; absent fields decode to their
/// defaults. CUSIPs can be queried but are never returned.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Ticker {
    /// Ticker symbol, e.g. `AAPL`.
    #[serde(default)]
    pub ticker: String,

    /// Whether the ticker is actively traded.
    #[serde(default)]
    pub active: bool,

    /// Physical address of the company's headquarters.
    #[serde(default)]
    pub address: Option<CompanyAddress>,

    /// Brand assets for the company.
    #[serde(default)]
    pub branding: Option<Branding>,

    /// SEC Central Index Key.
    #[serde(default)]
    pub cik: Option<String>,

    #[serde(default)]
    pub composite_figi: Option<String>,

    #[serde(default)]
    pub currency_name: Option<String>,

    /// Instant the ticker was delisted, for delisted tickers.
    #[serde(default)]
    pub delisted_utc: Option<DateTime<Utc>>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub homepage_url: Option<String>,

    /// Instant this record was last refreshed.
    #[serde(default)]
    pub last_updated_utc: Option<DateTime<Utc>>,

    /// Date the ticker was first listed.
    #[serde(default)]
    pub list_date: Option<NaiveDate>,

    #[serde(default)]
    pub locale: Option<String>,

    /// Market/asset class the ticker trades in, e.g. `stocks`.
    #[serde(default)]
    pub market: Option<String>,

    #[serde(default)]
    pub market_cap: Option<f64>,

    /// Company or fund name.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub phone_number: Option<String>,

    /// Primary listing exchange, as an ISO MIC code.
    #[serde(default)]
    pub primary_exchange: Option<String>,

    #[serde(default)]
    pub share_class_figi: Option<String>,

    #[serde(default)]
    pub share_class_shares_outstanding: Option<i64>,

    #[serde(default)]
    pub sic_code: Option<String>,

    #[serde(default)]
    pub sic_description: Option<String>,

    #[serde(default)]
    pub ticker_root: Option<String>,

    #[serde(default)]
    pub ticker_suffix: Option<String>,

    #[serde(default)]
    pub total_employees: Option<i32>,

    /// Ticker type code, e.g. `CS` for common stock.
    #[serde(rename = "type", default)]
    pub ticker_type: Option<String>,

    #[serde(default)]
    pub weighted_shares_outstanding: Option<i64>,
}

/// Physical address of a company.
#[derive(Clone, Serialize, Deserialize)]
pub struct CompanyAddress {
    #[serde(default)]
    pub address1: Option<String>,

    #[serde(default)]
    pub address2: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub postal_code: Option<String>,

    #[serde(default)]
    pub state: Option<String>,
}

/// Brand assets for a company.
#[derive(Clone, Serialize, Deserialize)]
pub struct Branding {
    #[serde(default)]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub icon_url: Option<String>,
}

/// A ticker type code the API understands, e.g. `CS` for common stock.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct TickerType {
    #[serde(default)]
    pub asset_class: Option<String>,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub locale: Option<String>,
}

/// Asset class / market type understood by the API.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Stocks,
    Options,
    Crypto,
    Fx,
    Indices,
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AssetClass::Stocks => "stocks",
                AssetClass::Options => "options",
                AssetClass::Crypto => "crypto",
                AssetClass::Fx => "fx",
                AssetClass::Indices => "indices",
            }
        )
    }
}

/// Market locale understood by the API.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketLocale {
    Us,
    Global,
}

impl std::fmt::Display for MarketLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MarketLocale::Us => "us",
                MarketLocale::Global => "global",
            }
        )
    }
}
