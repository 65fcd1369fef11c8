//! Error types for the Coincheck client library.

use thiserror::Error;

/// The main error type for all Coincheck client operations.
#[derive(Error, Debug)]
pub enum CoincheckError {
    /// Missing or malformed credentials for a private endpoint
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request could not be built into a well-formed signed request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The transport failed before a response was received
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The exchange rejected the key, nonce, or signature
    #[error("Authentication error: {0}")]
    Authentication(ApiError),

    /// The response body was not well-formed JSON
    #[error("Failed to decode response: {message}. Body: {body}")]
    Decode {
        /// Parser error description
        message: String,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// The exchange returned a business-level rejection
    #[error("Coincheck API error: {0}")]
    Exchange(ApiError),
}

impl CoincheckError {
    /// The exchange error carried by this error, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            CoincheckError::Authentication(e) | CoincheckError::Exchange(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the failure happened before any response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, CoincheckError::Transport(_))
    }
}

/// Errors raised by a [`Transport`](crate::rest::Transport) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// Connection or DNS failure.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other failure while sending the request or reading the body.
    #[error("Request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

impl From<reqwest_middleware::Error> for TransportError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => TransportError::Request(e.to_string()),
        }
    }
}

/// An error reported by the Coincheck API.
///
/// Coincheck reports failures as `{"success": false, "error": "..."}`, usually
/// together with a 4xx status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// The exchange's error message, or the raw body when it had none.
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.message)
    }
}

impl ApiError {
    /// Create a new API error from status and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn message_contains(&self, needle: &str) -> bool {
        self.message.to_ascii_lowercase().contains(needle)
    }

    /// Check if this is a rejected nonce.
    pub fn is_invalid_nonce(&self) -> bool {
        self.message_contains("nonce")
    }

    /// Check if the key or signature was rejected.
    pub fn is_invalid_authentication(&self) -> bool {
        self.status == 401
            || self.message_contains("authentication")
            || self.message_contains("signature")
    }

    /// Check if this is an authentication-class failure of any kind.
    pub fn is_auth_failure(&self) -> bool {
        self.is_invalid_nonce() || self.is_invalid_authentication()
    }

    /// Check if the order was rejected for lack of funds.
    pub fn is_insufficient_balance(&self) -> bool {
        self.message_contains("insufficient") || self.message_contains("not enough")
    }
}

/// Known Coincheck error messages for pattern matching.
pub mod error_messages {
    /// The key or signature did not verify.
    pub const INVALID_AUTHENTICATION: &str = "invalid authentication";
    /// The nonce was not greater than the last one seen.
    pub const NONCE_NOT_INCREMENTED: &str = "Nonce must be incremented";
    /// Order amount exceeds the available balance.
    pub const INSUFFICIENT_BALANCE: &str = "Insufficient balance";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(400, "Amount is too small");
        assert_eq!(error.to_string(), "HTTP 400: Amount is too small");
    }

    #[test]
    fn test_api_error_classifiers() {
        let nonce = ApiError::new(200, error_messages::NONCE_NOT_INCREMENTED);
        assert!(nonce.is_invalid_nonce());
        assert!(nonce.is_auth_failure());

        let auth = ApiError::new(200, error_messages::INVALID_AUTHENTICATION);
        assert!(auth.is_invalid_authentication());
        assert!(!auth.is_invalid_nonce());

        let unauthorized = ApiError::new(401, "");
        assert!(unauthorized.is_auth_failure());

        let funds = ApiError::new(400, error_messages::INSUFFICIENT_BALANCE);
        assert!(funds.is_insufficient_balance());
        assert!(!funds.is_auth_failure());
    }

    #[test]
    fn test_api_error_accessor() {
        let err = CoincheckError::Exchange(ApiError::new(400, "Invalid pair"));
        assert_eq!(err.api_error().map(|e| e.status), Some(400));

        let err = CoincheckError::Transport(TransportError::Timeout);
        assert!(err.api_error().is_none());
        assert!(err.is_transport());
    }
}
