//! Shared types for the Coincheck API.

pub mod common;

pub use common::{DEFAULT_PAIR, OrderType};
