//! Authentication module for the Coincheck API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA256 signature and header generation for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{
    ACCESS_KEY_VAR, Credentials, CredentialsProvider, EnvCredentials, SECRET_KEY_VAR,
    StaticCredentials,
};
pub use nonce::{IncreasingNonce, Nonce, NonceProvider};
pub use signature::{
    ACCESS_KEY_HEADER, ACCESS_NONCE_HEADER, ACCESS_SIGNATURE_HEADER, SignedHeaders, Signer,
    sign_request,
};
