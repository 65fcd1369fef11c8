//! Coincheck REST API endpoint catalog.

/// Base URL for the Coincheck REST API.
pub const COINCHECK_BASE_URL: &str = "https://coincheck.com";

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an endpoint's parameters go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamStyle {
    /// No parameters.
    None,
    /// URL query string.
    Query,
    /// Form-encoded request body.
    Body,
    /// Trailing path segment.
    Path,
}

/// Static description of one API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path relative to the base URL.
    pub path: &'static str,
    /// Whether the request must carry signed headers.
    pub authenticated: bool,
    /// How parameters are attached.
    pub params: ParamStyle,
}

impl Endpoint {
    const fn new(
        method: HttpMethod,
        path: &'static str,
        authenticated: bool,
        params: ParamStyle,
    ) -> Self {
        Self {
            method,
            path,
            authenticated,
            params,
        }
    }
}

/// Public endpoints (no authentication required).
pub mod public {
    use super::{Endpoint, HttpMethod, ParamStyle};

    // Ticker and trades are served from the order book path.
    /// Get the latest ticker.
    pub const TICKER: Endpoint =
        Endpoint::new(HttpMethod::Get, "/api/order_books", false, ParamStyle::Query);
    /// Get recent public trades.
    pub const TRADES: Endpoint =
        Endpoint::new(HttpMethod::Get, "/api/order_books", false, ParamStyle::Query);
    /// Get the order book.
    pub const ORDER_BOOKS: Endpoint =
        Endpoint::new(HttpMethod::Get, "/api/order_books", false, ParamStyle::Query);
}

/// Private endpoints (authentication required).
pub mod private {
    use super::{Endpoint, HttpMethod, ParamStyle};

    // Account endpoints
    /// Get account information.
    pub const ACCOUNTS: Endpoint =
        Endpoint::new(HttpMethod::Get, "/api/accounts", true, ParamStyle::None);
    /// Get account balance.
    pub const BALANCE: Endpoint =
        Endpoint::new(HttpMethod::Get, "/api/accounts/balance", true, ParamStyle::None);

    // Trading endpoints
    /// Create an order.
    pub const CREATE_ORDER: Endpoint =
        Endpoint::new(HttpMethod::Post, "/api/exchange/orders", true, ParamStyle::Body);
    /// List open orders.
    pub const OPEN_ORDERS: Endpoint = Endpoint::new(
        HttpMethod::Get,
        "/api/exchange/orders/opens",
        true,
        ParamStyle::None,
    );
    /// Cancel an order; the order id is appended to the path.
    pub const CANCEL_ORDER: Endpoint = Endpoint::new(
        HttpMethod::Delete,
        "/api/exchange/orders",
        true,
        ParamStyle::Path,
    );
    /// Get the cancellation status of an order.
    pub const CANCEL_STATUS: Endpoint = Endpoint::new(
        HttpMethod::Get,
        "/api/exchange/orders/cancel_status",
        true,
        ParamStyle::Query,
    );
    /// List own transactions.
    pub const TRANSACTIONS: Endpoint = Endpoint::new(
        HttpMethod::Get,
        "/api/exchange/orders/transactions",
        true,
        ParamStyle::None,
    );
}
