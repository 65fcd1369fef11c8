//! Trait definition for the Coincheck REST API client.
//!
//! This module provides the `CoincheckClient` trait which abstracts all REST API operations.
//! This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., a retrying wrapper for public calls)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use coincheck_api_client::rest::{CoincheckClient, CoincheckRestClient};
//!
//! async fn show_balance<C: CoincheckClient>(client: &C) -> Result<(), coincheck_api_client::CoincheckError> {
//!     let balance = client.get_balance().await?;
//!     println!("Balance: {}", balance);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::error::CoincheckError;
use crate::rest::private::OrderRequest;

/// Trait defining all Coincheck REST API operations.
///
/// All methods are async and return `Result<Value, CoincheckError>`; the
/// payload is the exchange's JSON, returned unmodified.
pub trait CoincheckClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the latest ticker for a pair.
    fn get_ticker(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<Value, CoincheckError>> + Send;

    /// Get the latest public trades for a pair.
    fn get_trades(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<Value, CoincheckError>> + Send;

    /// Get the order book for a pair.
    fn get_order_books(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<Value, CoincheckError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get account information.
    fn get_info(&self) -> impl Future<Output = Result<Value, CoincheckError>> + Send;

    /// Get account balance.
    fn get_balance(&self) -> impl Future<Output = Result<Value, CoincheckError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Create a new order.
    fn create_order(
        &self,
        request: &OrderRequest,
    ) -> impl Future<Output = Result<Value, CoincheckError>> + Send;

    /// List all open orders.
    fn get_open_orders(&self) -> impl Future<Output = Result<Value, CoincheckError>> + Send;

    /// Cancel an order.
    fn cancel(&self, order_id: u64) -> impl Future<Output = Result<Value, CoincheckError>> + Send;

    /// Get the cancellation status of an order.
    fn get_cancel_status(
        &self,
        order_id: u64,
    ) -> impl Future<Output = Result<Value, CoincheckError>> + Send;

    /// List recent own transactions.
    fn get_transactions(&self) -> impl Future<Output = Result<Value, CoincheckError>> + Send;
}
