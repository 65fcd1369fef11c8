//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Each call consumes one nonce, including calls whose transport later fails.

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::CoincheckError;
use crate::rest::CoincheckRestClient;
use crate::rest::endpoints::private;
use crate::rest::transport::Transport;

impl<T: Transport> CoincheckRestClient<T> {
    /// Get account information.
    pub async fn get_info(&self) -> Result<Value, CoincheckError> {
        let url = self.endpoint_url(&private::ACCOUNTS, None, None);
        self.execute(&private::ACCOUNTS, url, None).await
    }

    /// Get account balance.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coincheck_api_client::rest::CoincheckRestClient;
    /// use coincheck_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = CoincheckRestClient::builder().credentials(credentials).build();
    ///
    ///     let balance = client.get_balance().await?;
    ///     println!("JPY: {}", balance["jpy"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balance(&self) -> Result<Value, CoincheckError> {
        let url = self.endpoint_url(&private::BALANCE, None, None);
        self.execute(&private::BALANCE, url, None).await
    }

    /// Create a new order.
    pub async fn create_order(&self, request: &OrderRequest) -> Result<Value, CoincheckError> {
        request.validate()?;
        let url = self.endpoint_url(&private::CREATE_ORDER, None, None);
        self.execute(&private::CREATE_ORDER, url, Some(request.to_form_body()))
            .await
    }

    /// List all open orders.
    pub async fn get_open_orders(&self) -> Result<Value, CoincheckError> {
        let url = self.endpoint_url(&private::OPEN_ORDERS, None, None);
        self.execute(&private::OPEN_ORDERS, url, None).await
    }

    /// Cancel an order.
    pub async fn cancel(&self, order_id: u64) -> Result<Value, CoincheckError> {
        let id = order_id.to_string();
        let url = self.endpoint_url(&private::CANCEL_ORDER, Some(&id), None);
        self.execute(&private::CANCEL_ORDER, url, None).await
    }

    /// Get the cancellation status of an order.
    pub async fn get_cancel_status(&self, order_id: u64) -> Result<Value, CoincheckError> {
        let query = format!("id={order_id}");
        let url = self.endpoint_url(&private::CANCEL_STATUS, None, Some(&query));
        self.execute(&private::CANCEL_STATUS, url, None).await
    }

    /// List recent own transactions.
    pub async fn get_transactions(&self) -> Result<Value, CoincheckError> {
        let url = self.endpoint_url(&private::TRANSACTIONS, None, None);
        self.execute(&private::TRANSACTIONS, url, None).await
    }
}
