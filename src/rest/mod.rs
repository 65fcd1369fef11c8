//! Coincheck REST API client.
//!
//! Provides access to the Coincheck public market-data and private trading
//! REST endpoints.
//!
//! # Trait-based API
//!
//! The [`CoincheckClient`] trait abstracts all REST API operations, and the
//! [`Transport`] trait abstracts the HTTP exchange underneath them:
//!
//! ```rust,ignore
//! use coincheck_api_client::rest::{CoincheckClient, CoincheckRestClient};
//!
//! async fn use_client<C: CoincheckClient>(client: &C) -> Result<(), coincheck_api_client::CoincheckError> {
//!     let book = client.get_order_books("btc_jpy").await?;
//!     println!("Asks: {}", book["asks"]);
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
pub mod private;
pub mod public;
mod traits;
pub mod transport;

pub use client::{CoincheckRestClient, CoincheckRestClientBuilder};
pub use endpoints::{COINCHECK_BASE_URL, Endpoint, HttpMethod, ParamStyle};
pub use traits::CoincheckClient;
pub use transport::{
    HttpRequest, HttpResponse, ReqwestTransport, ReqwestTransportBuilder, Transport,
};
