//! HTTP client for the market-data REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{
        OptionContractQuery, OptionContractsQuery, Query, TickerDetailsQuery, TickerNewsQuery,
        TickerTypesQuery, TickersQuery,
    },
    types::{ListResponse, NewsArticle, OptionContract, Response, Ticker, TickerType},
    Error,
};

/// HTTP client for the market-data REST API.
///
/// Authenticates every request with a bearer token. Required path
/// parameters are validated before any network I/O. Each request builds a
/// fresh `reqwest::Client` with a 30-second timeout. The client never
/// retries.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.polygon.io`.
    base_api_url: String,
    api_key: String,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(api_key: &str) -> Self {
        Self {
            base_api_url: "https://api.polygon.io".to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with
    /// wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn get_url(&self, query: &impl Query) -> Result<Url, Error> {
        let path = query.path()?;
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get<T, Q>(&self, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(query)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .bearer_auth(&self.api_key)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches tickers matching the given query.
    pub async fn list_tickers(&self, query: &TickersQuery) -> Result<ListResponse<Ticker>, Error> {
        self.get::<ListResponse<Ticker>, TickersQuery>(query).await
    }

    /// Fetches details for a single ticker.
    pub async fn get_ticker_details(
        &self,
        query: &TickerDetailsQuery,
    ) -> Result<Response<Ticker>, Error> {
        self.get::<Response<Ticker>, TickerDetailsQuery>(query)
            .await
    }

    /// Fetches the ticker type codes the API understands.
    pub async fn get_ticker_types(
        &self,
        query: &TickerTypesQuery,
    ) -> Result<ListResponse<TickerType>, Error> {
        self.get::<ListResponse<TickerType>, TickerTypesQuery>(query)
            .await
    }

    /// Fetches news articles matching the given query.
    pub async fn list_ticker_news(
        &self,
        query: &TickerNewsQuery,
    ) -> Result<ListResponse<NewsArticle>, Error> {
        self.get::<ListResponse<NewsArticle>, TickerNewsQuery>(query)
            .await
    }

    /// Fetches options contracts matching the given query.
    pub async fn list_option_contracts(
        &self,
        query: &OptionContractsQuery,
    ) -> Result<ListResponse<OptionContract>, Error> {
        self.get::<ListResponse<OptionContract>, OptionContractsQuery>(query)
            .await
    }

    /// Fetches details for a single options contract.
    pub async fn get_option_contract(
        &self,
        query: &OptionContractQuery,
    ) -> Result<Response<OptionContract>, Error> {
        self.get::<Response<OptionContract>, OptionContractQuery>(query)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
