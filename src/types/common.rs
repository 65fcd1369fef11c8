//! Common domain types for the Coincheck API.

use serde::{Deserialize, Serialize};

/// The pair used when a caller has no preference.
pub const DEFAULT_PAIR: &str = "btc_jpy";

/// Side of an order, sent as the `order_type` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderType {
    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Buy => "buy",
            OrderType::Sell => "sell",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(OrderType::Buy),
            "sell" => Ok(OrderType::Sell),
            other => Err(format!("unknown order type: {other}")),
        }
    }
}

/// Check that `pair` can be placed in a query string or form body verbatim.
pub(crate) fn is_valid_pair(pair: &str) -> bool {
    !pair.is_empty()
        && pair
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_round_trip() {
        assert_eq!(OrderType::Buy.to_string(), "buy");
        assert_eq!("sell".parse::<OrderType>().unwrap(), OrderType::Sell);
        assert!("market_buy".parse::<OrderType>().is_err());
    }

    #[test]
    fn test_order_type_serde() {
        let json = serde_json::to_string(&OrderType::Sell).unwrap();
        assert_eq!(json, "\"sell\"");
    }

    #[test]
    fn test_pair_validation() {
        assert!(is_valid_pair(DEFAULT_PAIR));
        assert!(is_valid_pair("etc_jpy"));
        assert!(!is_valid_pair(""));
        assert!(!is_valid_pair("btc_jpy&amount=1"));
        assert!(!is_valid_pair("BTC_JPY"));
    }
}
