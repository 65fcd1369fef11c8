//! # Coincheck Client
//!
//! An async Rust client library for the Coincheck exchange REST API.
//!
//! ## Features
//!
//! - Public market data: ticker, trades, order books
//! - Private account and trading endpoints with HMAC-SHA256 request signing
//! - Strictly increasing nonces, safe to share across tasks and threads
//! - Pluggable HTTP transport
//! - Typed errors for configuration, transport, authentication, decoding and
//!   exchange rejections
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coincheck_api_client::rest::CoincheckRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoincheckRestClient::new();
//!     let ticker = client.get_ticker("btc_jpy").await?;
//!     println!("Ticker: {}", ticker);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, CoincheckError, TransportError};
pub use types::common::{DEFAULT_PAIR, OrderType};

/// Result type alias using CoincheckError
pub type Result<T> = std::result::Result<T, CoincheckError>;
