//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoincheckError;
use crate::types::OrderType;
use crate::types::common::is_valid_pair;

/// Request to create a new order.
///
/// The form body is `rate={rate}&amount={amount}&order_type={order_type}&pair={pair}`
/// in exactly that order, with values written verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Limit price.
    pub rate: Decimal,
    /// Order amount in the base currency.
    pub amount: Decimal,
    /// Buy or sell.
    pub order_type: OrderType,
    /// Trading pair (e.g., "btc_jpy").
    pub pair: String,
}

impl OrderRequest {
    /// Create a new order request.
    pub fn new(
        rate: Decimal,
        amount: Decimal,
        order_type: OrderType,
        pair: impl Into<String>,
    ) -> Self {
        Self {
            rate,
            amount,
            order_type,
            pair: pair.into(),
        }
    }

    /// Create a buy order request.
    pub fn buy(rate: Decimal, amount: Decimal, pair: impl Into<String>) -> Self {
        Self::new(rate, amount, OrderType::Buy, pair)
    }

    /// Create a sell order request.
    pub fn sell(rate: Decimal, amount: Decimal, pair: impl Into<String>) -> Self {
        Self::new(rate, amount, OrderType::Sell, pair)
    }

    /// Check the request shape. Value ranges are left to the exchange.
    pub fn validate(&self) -> Result<(), CoincheckError> {
        if !is_valid_pair(&self.pair) {
            return Err(CoincheckError::InvalidRequest(format!(
                "invalid pair: {:?}",
                self.pair
            )));
        }
        Ok(())
    }

    /// Serialize to the form body that is both signed and sent.
    pub fn to_form_body(&self) -> String {
        format!(
            "rate={}&amount={}&order_type={}&pair={}",
            self.rate, self.amount, self.order_type, self.pair
        )
    }
}
