//! HMAC-SHA256 signature generation for Coincheck API authentication.
//!
//! Coincheck private endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA256(nonce + url + body, secret_key))
//! ```
//!
//! `url` is the full request URL including any query string, and `body` is
//! the exact form body sent on the wire (empty for GET and DELETE).

use std::sync::Arc;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::{Credentials, IncreasingNonce, Nonce, NonceProvider};
use crate::error::CoincheckError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the access key.
pub const ACCESS_KEY_HEADER: &str = "ACCESS-KEY";
/// Header carrying the nonce.
pub const ACCESS_NONCE_HEADER: &str = "ACCESS-NONCE";
/// Header carrying the hex signature.
pub const ACCESS_SIGNATURE_HEADER: &str = "ACCESS-SIGNATURE";

/// Sign a request for Coincheck's private API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `nonce` - The nonce value for this request
/// * `url` - The full request URL (e.g., "https://coincheck.com/api/accounts")
/// * `body` - The form body, or an empty string
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 signature (64 characters).
///
/// # Example
///
/// ```rust
/// use coincheck_api_client::auth::{Credentials, Nonce, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("access_key", "secret_key");
/// let signature = sign_request(
///     &credentials,
///     Nonce::new(1000),
///     "https://coincheck.com/api/accounts",
///     "",
/// )?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    nonce: Nonce,
    url: &str,
    body: &str,
) -> Result<String, CoincheckError> {
    let secret = credentials.expose_secret();
    if secret.is_empty() {
        return Err(CoincheckError::Configuration(
            "secret key must not be empty".to_string(),
        ));
    }

    let mut hmac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| CoincheckError::Configuration(format!("Invalid HMAC key: {e}")))?;
    hmac.update(nonce.to_string().as_bytes());
    hmac.update(url.as_bytes());
    hmac.update(body.as_bytes());

    Ok(hex::encode(hmac.finalize().into_bytes()))
}

/// The authentication headers for one private request.
///
/// Valid only for the URL and body they were computed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Value of `ACCESS-KEY`.
    pub access_key: String,
    /// Value of `ACCESS-NONCE`.
    pub nonce: Nonce,
    /// Value of `ACCESS-SIGNATURE`.
    pub signature: String,
}

impl SignedHeaders {
    /// The headers as `(name, value)` pairs, in wire order.
    pub fn to_pairs(&self) -> [(&'static str, String); 3] {
        [
            (ACCESS_KEY_HEADER, self.access_key.clone()),
            (ACCESS_NONCE_HEADER, self.nonce.to_string()),
            (ACCESS_SIGNATURE_HEADER, self.signature.clone()),
        ]
    }
}

/// Produces [`SignedHeaders`] using a shared nonce source.
///
/// Every call to [`Signer::sign`] that gets past credential validation
/// consumes exactly one nonce, whether or not the request is later sent.
#[derive(Clone)]
pub struct Signer {
    nonce_provider: Arc<dyn NonceProvider>,
}

impl Signer {
    /// Create a signer drawing nonces from `nonce_provider`.
    pub fn new(nonce_provider: Arc<dyn NonceProvider>) -> Self {
        Self { nonce_provider }
    }

    /// Compute the authentication headers for a request to `url` with `body`.
    pub fn sign(
        &self,
        url: &str,
        body: &str,
        credentials: &Credentials,
    ) -> Result<SignedHeaders, CoincheckError> {
        credentials.validate()?;

        let nonce = self.nonce_provider.next_nonce();
        let signature = sign_request(credentials, nonce, url, body)?;

        Ok(SignedHeaders {
            access_key: credentials.access_key.clone(),
            nonce,
            signature,
        })
    }
}

impl Default for Signer {
    fn default() -> Self {
        Self::new(Arc::new(IncreasingNonce::new()))
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedNonce(u64);

    impl NonceProvider for FixedNonce {
        fn next_nonce(&self) -> Nonce {
            Nonce::new(self.0)
        }
    }

    #[test]
    fn test_signature_known_vector() {
        let credentials = Credentials::new("key", "abc");
        let signature = sign_request(
            &credentials,
            Nonce::new(1000),
            "https://coincheck.com/api/accounts",
            "",
        )
        .unwrap();

        assert_eq!(
            signature,
            "4676cc09a7a4c9df69c666c7ca8351882b36a18d39a652c30a92a61bd46d5b1b"
        );
    }

    #[test]
    fn test_signature_known_vector_with_body() {
        let credentials = Credentials::new("key", "secret");
        let signature = sign_request(
            &credentials,
            Nonce::new(1_700_000_000_000_000_000),
            "https://coincheck.com/api/exchange/orders",
            "rate=100&amount=0.01&order_type=buy&pair=btc_jpy",
        )
        .unwrap();

        assert_eq!(
            signature,
            "83ec2e021698a0c8cda41ef67e57a3d31371824e85c4c508343a4cf93c7f7833"
        );
    }

    #[test]
    fn test_signature_consistency() {
        let credentials = Credentials::new("key", "my_secret");
        let url = "https://coincheck.com/api/accounts/balance";

        let sig1 = sign_request(&credentials, Nonce::new(12345), url, "").unwrap();
        let sig2 = sign_request(&credentials, Nonce::new(12345), url, "").unwrap();

        assert_eq!(sig1, sig2);
        assert_eq!(sig1.len(), 64);
        assert!(sig1.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_signature_changes_with_nonce() {
        let credentials = Credentials::new("key", "abc");
        let url = "https://coincheck.com/api/accounts";

        let sig1 = sign_request(&credentials, Nonce::new(1000), url, "").unwrap();
        let sig2 = sign_request(&credentials, Nonce::new(1001), url, "").unwrap();

        assert_ne!(sig1, sig2);
        assert_eq!(
            sig2,
            "a8c7bb72764b852b84103a4de0240dfe68ecc253f9efe34910d6b30ed23e0a5a"
        );
    }

    #[test]
    fn test_signature_changes_with_url_and_body() {
        let credentials = Credentials::new("key", "my_secret");
        let nonce = Nonce::new(1);

        let base = sign_request(&credentials, nonce, "https://coincheck.com/api/x", "a=1").unwrap();
        let url = sign_request(&credentials, nonce, "https://coincheck.com/api/y", "a=1").unwrap();
        let body = sign_request(&credentials, nonce, "https://coincheck.com/api/x", "a=2").unwrap();

        assert_ne!(base, url);
        assert_ne!(base, body);
    }

    #[test]
    fn test_signer_builds_all_headers() {
        let signer = Signer::new(Arc::new(FixedNonce(1000)));
        let credentials = Credentials::new("my_access_key", "abc");

        let headers = signer
            .sign("https://coincheck.com/api/accounts", "", &credentials)
            .unwrap();

        assert_eq!(headers.access_key, "my_access_key");
        assert_eq!(headers.nonce, Nonce::new(1000));
        assert_eq!(
            headers.signature,
            "4676cc09a7a4c9df69c666c7ca8351882b36a18d39a652c30a92a61bd46d5b1b"
        );

        let pairs = headers.to_pairs();
        assert_eq!(pairs[0], ("ACCESS-KEY", "my_access_key".to_string()));
        assert_eq!(pairs[1], ("ACCESS-NONCE", "1000".to_string()));
        assert_eq!(pairs[2].0, "ACCESS-SIGNATURE");
        assert!(pairs.iter().all(|(_, v)| !v.is_empty()));
    }

    #[test]
    fn test_signer_rejects_missing_secret() {
        let signer = Signer::default();
        let credentials = Credentials::new("key", "");

        let result = signer.sign("https://coincheck.com/api/accounts", "", &credentials);
        assert!(matches!(result, Err(CoincheckError::Configuration(_))));
    }
}
