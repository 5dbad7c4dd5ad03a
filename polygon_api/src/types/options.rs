//! Options contract types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Details of a single options contract.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct OptionContract {
    /// Option ticker symbol, e.g. `O:AAPL250117C00150000`.
    #[serde(default)]
    pub ticker: String,

    #[serde(default)]
    pub cfi: Option<String>,

    /// Call, put, or other.
    #[serde(default)]
    pub contract_type: Option<ContractType>,

    /// Exercise style, e.g. `american`.
    #[serde(default)]
    pub exercise_style: Option<String>,

    /// Date the contract expires.
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,

    #[serde(default)]
    pub primary_exchange: Option<String>,

    #[serde(default)]
    pub shares_per_contract: Option<i64>,

    /// Strike price of the contract.
    #[serde(default)]
    pub strike_price: Option<f64>,

    /// Ticker of the underlying asset.
    #[serde(default)]
    pub underlying_ticker: Option<String>,

    /// Extra underlyings for non-standard contracts.
    #[serde(default)]
    pub additional_underlyings: Vec<AdditionalUnderlying>,
}

/// An extra underlying on a non-standard contract, e.g. after a merger.
#[derive(Clone, Serialize, Deserialize)]
pub struct AdditionalUnderlying {
    #[serde(default)]
    pub amount: Option<f64>,

    #[serde(rename = "type", default)]
    pub underlying_type: Option<String>,

    #[serde(default)]
    pub underlying: Option<String>,
}

/// Contract type of an options contract.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Call,
    Put,
    /// Non-standard contracts, e.g. those with multiple underlyings.
    Other,
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ContractType::Call => "call",
                ContractType::Put => "put",
                ContractType::Other => "other",
            }
        )
    }
}
