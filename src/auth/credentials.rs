//! Credential management for Coincheck API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::CoincheckError;

/// Default environment variable holding the access key.
pub const ACCESS_KEY_VAR: &str = "COINCHECK_ACCESS_KEY";
/// Default environment variable holding the secret key.
pub const SECRET_KEY_VAR: &str = "COINCHECK_SECRET_KEY";

/// API credentials containing the access key and secret key.
#[derive(Clone)]
pub struct Credentials {
    /// The access key (public identifier, sent as `ACCESS-KEY`)
    pub access_key: String,
    /// The secret key (private, used for signing only)
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an access key and secret key.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Get the secret key for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }

    /// Check that both keys are present and usable as header/HMAC input.
    pub fn validate(&self) -> Result<(), CoincheckError> {
        if self.access_key.trim().is_empty() {
            return Err(CoincheckError::Configuration(
                "access key must not be empty".to_string(),
            ));
        }
        if self.access_key.chars().any(|c| c.is_control()) {
            return Err(CoincheckError::Configuration(
                "access key contains control characters".to_string(),
            ));
        }
        if self.expose_secret().is_empty() {
            return Err(CoincheckError::Configuration(
                "secret key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(access_key, secret_key),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `COINCHECK_ACCESS_KEY` and `COINCHECK_SECRET_KEY`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, CoincheckError> {
        Self::from_env_vars(ACCESS_KEY_VAR, SECRET_KEY_VAR)
    }

    /// Create credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, CoincheckError> {
        let access_key = std::env::var(key_var).map_err(|_| {
            CoincheckError::Configuration(format!("environment variable {key_var} not set"))
        })?;
        let secret_key = std::env::var(secret_var).map_err(|_| {
            CoincheckError::Configuration(format!("environment variable {secret_var} not set"))
        })?;

        Ok(Self {
            credentials: Credentials::new(access_key, secret_key),
        })
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if the environment variables are not set.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
