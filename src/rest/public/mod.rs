//! Public REST API endpoints (no authentication required).

use serde_json::Value;

use crate::error::CoincheckError;
use crate::rest::CoincheckRestClient;
use crate::rest::endpoints::{Endpoint, public};
use crate::rest::transport::Transport;
use crate::types::common::is_valid_pair;

#[derive(serde::Serialize)]
struct PairParams<'a> {
    pair: &'a str,
}

impl<T: Transport> CoincheckRestClient<T> {
    /// Get the latest ticker for a pair.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coincheck_api_client::rest::CoincheckRestClient;
    /// use coincheck_api_client::types::DEFAULT_PAIR;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoincheckRestClient::new();
    ///     let ticker = client.get_ticker(DEFAULT_PAIR).await?;
    ///     println!("Last: {}", ticker["last"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_ticker(&self, pair: &str) -> Result<Value, CoincheckError> {
        self.get_pair(&public::TICKER, pair).await
    }

    /// Get the latest public trades for a pair.
    pub async fn get_trades(&self, pair: &str) -> Result<Value, CoincheckError> {
        self.get_pair(&public::TRADES, pair).await
    }

    /// Get the order book (asks and bids) for a pair.
    pub async fn get_order_books(&self, pair: &str) -> Result<Value, CoincheckError> {
        self.get_pair(&public::ORDER_BOOKS, pair).await
    }

    async fn get_pair(&self, endpoint: &Endpoint, pair: &str) -> Result<Value, CoincheckError> {
        if !is_valid_pair(pair) {
            return Err(CoincheckError::InvalidRequest(format!(
                "invalid pair: {pair:?}"
            )));
        }
        self.get_with_params(endpoint, &PairParams { pair }).await
    }
}
