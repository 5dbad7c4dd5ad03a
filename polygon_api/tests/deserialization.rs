use chrono::NaiveDate;
use polygon_api::types::{
    ContractType, ListResponse, NewsArticle, OptionContract, Response, Ticker, TickerType,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_tickers_full() {
    let json = load_fixture("tickers.json");
    let resp: ListResponse<Ticker> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.status, "OK");
    assert_eq!(resp.request_id, "6a7e466379af0a71039d60cc78e72282");
    assert_eq!(resp.count, Some(2));
    assert_eq!(resp.results.len(), 2);

    let apple = &resp.results[0];
    assert_eq!(apple.ticker, "AAPL");
    assert!(apple.active);
    assert_eq!(apple.name.as_deref(), Some("Apple Inc."));
    assert_eq!(apple.cik.as_deref(), Some("0000320193"));
    assert_eq!(apple.market.as_deref(), Some("stocks"));
    assert_eq!(apple.primary_exchange.as_deref(), Some("XNAS"));
    assert_eq!(apple.ticker_type.as_deref(), Some("CS"));
    assert_eq!(
        apple.list_date,
        Some(NaiveDate::from_ymd_opt(1980, 12, 12).unwrap())
    );
    assert_eq!(apple.share_class_shares_outstanding, Some(15441880000));
    assert_eq!(apple.total_employees, Some(161000));
    let address = apple.address.as_ref().unwrap();
    assert_eq!(address.city.as_deref(), Some("CUPERTINO"));
    assert!(apple.branding.as_ref().unwrap().logo_url.is_some());

    let delisted = &resp.results[1];
    assert!(!delisted.active);
    assert!(delisted.delisted_utc.is_some());
    assert!(delisted.address.is_none());
    assert!(delisted.market_cap.is_none());
}

#[test]
fn deserialize_tickers_sparse_record() {
    // Fields absent from the payload decode to defaults, never an error.
    let json = r#"{"results":[{"ticker":"AAPL","active":true}]}"#;
    let resp: ListResponse<Ticker> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.results.len(), 1);

    let ticker = &resp.results[0];
    assert_eq!(ticker.ticker, "AAPL");
    assert!(ticker.active);
    assert!(ticker.name.is_none());
    assert!(ticker.list_date.is_none());
    assert!(ticker.delisted_utc.is_none());
    assert!(ticker.address.is_none());
    assert!(ticker.ticker_type.is_none());
    assert_eq!(resp.status, "");
    assert_eq!(resp.count, None);
}

#[test]
fn deserialize_tickers_missing_results() {
    let json = load_fixture("tickers_minimal.json");
    let resp: ListResponse<Ticker> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.status, "OK");
    assert!(resp.results.is_empty());
}

#[test]
fn deserialize_ticker_details() {
    let json = load_fixture("ticker_details.json");
    let resp: Response<Ticker> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.status, "OK");

    let ticker = resp.results.unwrap();
    assert_eq!(ticker.ticker, "AAPL");
    assert_eq!(ticker.market_cap, Some(2634750000000.0));
    assert_eq!(ticker.currency_name.as_deref(), Some("usd"));
}

#[test]
fn deserialize_ticker_types() {
    let json = load_fixture("ticker_types.json");
    let resp: ListResponse<TickerType> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.results.len(), 3);
    assert_eq!(resp.results[0].code.as_deref(), Some("CS"));
    assert_eq!(resp.results[0].description.as_deref(), Some("Common Stock"));
    assert_eq!(resp.results[1].code.as_deref(), Some("ETF"));
    assert_eq!(resp.results[0].asset_class.as_deref(), Some("stocks"));
}

#[test]
fn deserialize_news() {
    let json = load_fixture("news.json");
    let resp: ListResponse<NewsArticle> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.results.len(), 1);

    let article = &resp.results[0];
    assert_eq!(article.id, "e0f2ef3d0f1a04d5f29b6d7c8b0e4d37f4b2c9e3");
    assert_eq!(article.tickers, vec!["AAPL".to_string()]);
    assert_eq!(article.keywords.len(), 2);
    assert_eq!(
        article.title.as_deref(),
        Some("Apple Shares Rise After Earnings Beat")
    );
    let published = article.published_utc.unwrap();
    assert_eq!(published.to_rfc3339(), "2024-04-26T13:30:00+00:00");
    assert_eq!(
        article.publisher.as_ref().unwrap().name.as_deref(),
        Some("Benzinga")
    );
}

#[test]
fn deserialize_option_contracts() {
    let json = load_fixture("option_contracts.json");
    let resp: ListResponse<OptionContract> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.results.len(), 2);

    let call = &resp.results[0];
    assert_eq!(call.ticker, "O:AAPL250117C00150000");
    assert!(matches!(call.contract_type, Some(ContractType::Call)));
    assert_eq!(
        call.expiration_date,
        Some(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap())
    );
    assert_eq!(call.strike_price, Some(150.0));
    assert_eq!(call.shares_per_contract, Some(100));
    assert_eq!(call.underlying_ticker.as_deref(), Some("AAPL"));
    assert!(call.additional_underlyings.is_empty());

    let put = &resp.results[1];
    assert!(matches!(put.contract_type, Some(ContractType::Put)));
    assert_eq!(put.additional_underlyings.len(), 1);
    assert_eq!(
        put.additional_underlyings[0].underlying.as_deref(),
        Some("VMW")
    );
    assert_eq!(put.additional_underlyings[0].amount, Some(44.31));
    assert_eq!(
        put.additional_underlyings[0].underlying_type.as_deref(),
        Some("equity")
    );
}

#[test]
fn deserialize_option_contract_details() {
    let json = load_fixture("option_contract.json");
    let resp: Response<OptionContract> = serde_json::from_str(&json).unwrap();
    let contract = resp.results.unwrap();
    assert_eq!(contract.ticker, "O:AAPL250117C00150000");
    assert_eq!(contract.exercise_style.as_deref(), Some("american"));
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"results": not valid json}"#;
    let result = serde_json::from_str::<ListResponse<Ticker>>(bad_json);
    assert!(result.is_err());
}
