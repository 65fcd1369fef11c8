use std::sync::Arc;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coincheck_api_client::auth::StaticCredentials;
use coincheck_api_client::error::CoincheckError;
use coincheck_api_client::rest::{CoincheckClient, CoincheckRestClient};
use coincheck_api_client::types::DEFAULT_PAIR;

fn build_public_client(server: &MockServer) -> CoincheckRestClient {
    CoincheckRestClient::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn test_get_ticker() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "last": 27390,
        "bid": 26900,
        "ask": 27390,
        "high": 27659,
        "low": 26400,
        "volume": "50.29627103",
        "timestamp": 1423377841
    });

    Mock::given(method("GET"))
        .and(path("/api/order_books"))
        .and(query_param("pair", "btc_jpy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let ticker = client.get_ticker(DEFAULT_PAIR).await.unwrap();
    assert_eq!(ticker["last"], 27390);
    assert_eq!(ticker["volume"], "50.29627103");
}

#[tokio::test]
async fn test_get_trades() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "success": true,
        "data": [{
            "id": 82,
            "amount": "0.28391",
            "rate": "35400.0",
            "pair": "btc_jpy",
            "order_type": "sell",
            "created_at": "2015-01-10T05:55:38.000Z"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/api/order_books"))
        .and(query_param("pair", "eth_jpy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let trades = client.get_trades("eth_jpy").await.unwrap();
    assert_eq!(trades["data"][0]["id"], 82);
}

#[tokio::test]
async fn test_get_order_books_without_auth_headers() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "asks": [["27330.0", "2.25"], ["27340.0", "0.45"]],
        "bids": [["27240.0", "1.1543"]]
    });

    Mock::given(method("GET"))
        .and(path("/api/order_books"))
        .and(query_param("pair", "btc_jpy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    // Credentials are configured, but public calls must not be signed.
    let client = CoincheckRestClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new("key", "secret")))
        .build();
    let book = client.get_order_books("btc_jpy").await.unwrap();
    assert_eq!(book["asks"].as_array().unwrap().len(), 2);

    let received = server.received_requests().await.unwrap();
    for name in ["ACCESS-KEY", "ACCESS-NONCE", "ACCESS-SIGNATURE"] {
        assert!(received[0].headers.get(name).is_none());
    }
}

#[tokio::test]
async fn test_invalid_pair_rejected_locally() {
    let server = MockServer::start().await;
    let client = build_public_client(&server);

    let err = client.get_ticker("").await.unwrap_err();
    assert!(matches!(err, CoincheckError::InvalidRequest(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_public_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/order_books"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_ticker(DEFAULT_PAIR).await.unwrap_err();

    let api = err.api_error().unwrap();
    assert_eq!(api.status, 500);
    assert_eq!(api.message, "Internal Server Error");
}

async fn last_price<C: CoincheckClient>(client: &C) -> Result<serde_json::Value, CoincheckError> {
    let ticker = client.get_ticker(DEFAULT_PAIR).await?;
    Ok(ticker["last"].clone())
}

#[tokio::test]
async fn test_trait_usage() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/order_books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "last": 100 })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    assert_eq!(last_price(&client).await.unwrap(), 100);
}
