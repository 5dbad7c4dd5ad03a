//! Ticker news types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article mentioning one or more tickers.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Unique article identifier.
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub amp_url: Option<String>,

    /// Link to the article on the publisher's site.
    #[serde(default)]
    pub article_url: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    /// Instant the article was published.
    #[serde(default)]
    pub published_utc: Option<DateTime<Utc>>,

    /// Publisher of the article.
    #[serde(default)]
    pub publisher: Option<Publisher>,

    /// Tickers mentioned in the article.
    #[serde(default)]
    pub tickers: Vec<String>,

    #[serde(default)]
    pub title: Option<String>,
}

/// A news article publisher.
#[derive(Clone, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(default)]
    pub favicon_url: Option<String>,

    #[serde(default)]
    pub homepage_url: Option<String>,

    #[serde(default)]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}
