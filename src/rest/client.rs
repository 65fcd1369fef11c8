//! Coincheck REST API client implementation.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::{CredentialsProvider, IncreasingNonce, NonceProvider, Signer};
use crate::error::{ApiError, CoincheckError};
use crate::rest::endpoints::{COINCHECK_BASE_URL, Endpoint};
use crate::rest::private::OrderRequest;
use crate::rest::traits::CoincheckClient;
use crate::rest::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

/// The Coincheck REST API client.
///
/// Public calls are sent as-is. Private calls are signed with a fresh nonce
/// from the client's nonce provider. Clones share that provider, so nonces
/// stay strictly increasing across every clone of one client.
///
/// # Example
///
/// ```rust,no_run
/// use coincheck_api_client::rest::CoincheckRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = CoincheckRestClient::new();
///
///     let ticker = client.get_ticker("btc_jpy").await?;
///     println!("Ticker: {}", ticker);
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use coincheck_api_client::rest::CoincheckRestClient;
/// use coincheck_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("access_key", "secret_key"));
///     let client = CoincheckRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balance = client.get_balance().await?;
///     println!("Balance: {}", balance);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoincheckRestClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    signer: Signer,
}

impl CoincheckRestClient<ReqwestTransport> {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`CoincheckRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoincheckRestClientBuilder<ReqwestTransport> {
        CoincheckRestClientBuilder::new()
    }
}

impl<T: Transport> CoincheckRestClient<T> {
    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Build the full request URL for `endpoint`.
    pub(crate) fn endpoint_url(
        &self,
        endpoint: &Endpoint,
        path_param: Option<&str>,
        query: Option<&str>,
    ) -> String {
        let mut url = format!("{}{}", self.base_url, endpoint.path);
        if let Some(segment) = path_param {
            url.push('/');
            url.push_str(segment);
        }
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_params<Q>(
        &self,
        endpoint: &Endpoint,
        params: &Q,
    ) -> Result<Value, CoincheckError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| CoincheckError::InvalidRequest(e.to_string()))?;
        let url = self.endpoint_url(endpoint, None, Some(&query_string));
        self.execute(endpoint, url, None).await
    }

    /// Send a request to `url`, signing it when `endpoint` is private.
    ///
    /// `url` and `body` are signed exactly as they are sent.
    pub(crate) async fn execute(
        &self,
        endpoint: &Endpoint,
        url: String,
        body: Option<String>,
    ) -> Result<Value, CoincheckError> {
        let mut headers = Vec::new();

        if endpoint.authenticated {
            let credentials = self.credentials.as_ref().ok_or_else(|| {
                CoincheckError::Configuration(
                    "access key and secret key required for private endpoints".to_string(),
                )
            })?;
            let signed = self.signer.sign(
                &url,
                body.as_deref().unwrap_or_default(),
                credentials.get_credentials(),
            )?;
            headers.extend(
                signed
                    .to_pairs()
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), value)),
            );
        }

        tracing::debug!(
            method = %endpoint.method,
            url = %url,
            authenticated = endpoint.authenticated,
            "sending request"
        );

        let response = self
            .transport
            .send(HttpRequest {
                method: endpoint.method,
                url,
                headers,
                body,
            })
            .await?;

        parse_response(response)
    }
}

/// Map a raw response onto a decoded payload or a typed error.
fn parse_response(response: HttpResponse) -> Result<Value, CoincheckError> {
    let status = response.status;
    let parsed = serde_json::from_slice::<Value>(&response.body);
    let raw_body = || String::from_utf8_lossy(&response.body).into_owned();

    if !response.is_success() {
        let message = parsed
            .as_ref()
            .ok()
            .and_then(error_message)
            .unwrap_or_else(raw_body);
        return Err(classify(ApiError::new(status, message)));
    }

    let value = parsed.map_err(|e| CoincheckError::Decode {
        message: e.to_string(),
        body: raw_body(),
    })?;

    // Coincheck reports some failures with a 2xx status and `success: false`.
    if value.get("success") == Some(&Value::Bool(false)) {
        let message = error_message(&value).unwrap_or_else(|| value.to_string());
        return Err(classify(ApiError::new(status, message)));
    }

    Ok(value)
}

fn error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn classify(error: ApiError) -> CoincheckError {
    if error.is_auth_failure() {
        tracing::warn!(status = error.status, message = %error.message, "authentication rejected");
        CoincheckError::Authentication(error)
    } else {
        tracing::debug!(status = error.status, message = %error.message, "exchange error");
        CoincheckError::Exchange(error)
    }
}

impl Default for CoincheckRestClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for CoincheckRestClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoincheckRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`CoincheckRestClient`].
pub struct CoincheckRestClientBuilder<T = ReqwestTransport> {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    transport: T,
}

impl CoincheckRestClientBuilder<ReqwestTransport> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: COINCHECK_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            transport: ReqwestTransport::new(),
        }
    }
}

impl<T: Transport> CoincheckRestClientBuilder<T> {
    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    ///
    /// Share one provider between clients using the same access key.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Replace the HTTP transport.
    pub fn transport<U: Transport>(self, transport: U) -> CoincheckRestClientBuilder<U> {
        CoincheckRestClientBuilder {
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider: self.nonce_provider,
            transport,
        }
    }

    /// Build the client.
    pub fn build(self) -> CoincheckRestClient<T> {
        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(IncreasingNonce::new()));

        CoincheckRestClient {
            transport: self.transport,
            base_url: self.base_url,
            credentials: self.credentials,
            signer: Signer::new(nonce_provider),
        }
    }
}

impl Default for CoincheckRestClientBuilder<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

// CoincheckClient trait implementation.

impl<T: Transport> CoincheckClient for CoincheckRestClient<T> {
    // ========== Public Endpoints ==========

    async fn get_ticker(&self, pair: &str) -> Result<Value, CoincheckError> {
        CoincheckRestClient::get_ticker(self, pair).await
    }

    async fn get_trades(&self, pair: &str) -> Result<Value, CoincheckError> {
        CoincheckRestClient::get_trades(self, pair).await
    }

    async fn get_order_books(&self, pair: &str) -> Result<Value, CoincheckError> {
        CoincheckRestClient::get_order_books(self, pair).await
    }

    // ========== Private Endpoints - Account ==========

    async fn get_info(&self) -> Result<Value, CoincheckError> {
        CoincheckRestClient::get_info(self).await
    }

    async fn get_balance(&self) -> Result<Value, CoincheckError> {
        CoincheckRestClient::get_balance(self).await
    }

    // ========== Private Endpoints - Trading ==========

    async fn create_order(&self, request: &OrderRequest) -> Result<Value, CoincheckError> {
        CoincheckRestClient::create_order(self, request).await
    }

    async fn get_open_orders(&self) -> Result<Value, CoincheckError> {
        CoincheckRestClient::get_open_orders(self).await
    }

    async fn cancel(&self, order_id: u64) -> Result<Value, CoincheckError> {
        CoincheckRestClient::cancel(self, order_id).await
    }

    async fn get_cancel_status(&self, order_id: u64) -> Result<Value, CoincheckError> {
        CoincheckRestClient::get_cancel_status(self, order_id).await
    }

    async fn get_transactions(&self) -> Result<Value, CoincheckError> {
        CoincheckRestClient::get_transactions(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::endpoints::{private, public};

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_endpoint_url() {
        let client = CoincheckRestClient::builder()
            .base_url("https://example.com/")
            .build();

        assert_eq!(
            client.endpoint_url(&public::TICKER, None, Some("pair=btc_jpy")),
            "https://example.com/api/order_books?pair=btc_jpy"
        );
        assert_eq!(
            client.endpoint_url(&private::CANCEL_ORDER, Some("42"), None),
            "https://example.com/api/exchange/orders/42"
        );
        assert_eq!(
            client.endpoint_url(&private::ACCOUNTS, None, Some("")),
            "https://example.com/api/accounts"
        );
    }

    #[test]
    fn test_parse_success() {
        let value = parse_response(response(200, r#"{"success":true,"id":7}"#)).unwrap();
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn test_parse_array_body() {
        let value = parse_response(response(200, r#"[[1,"30000","0.1"]]"#)).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_response(response(200, "{not json")).unwrap_err();
        match err {
            CoincheckError::Decode { body, .. } => assert_eq!(body, "{not json"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_application_error() {
        let err = parse_response(response(
            200,
            r#"{"success":false,"error":"Insufficient balance"}"#,
        ))
        .unwrap_err();
        match err {
            CoincheckError::Exchange(api) => {
                assert_eq!(api.status, 200);
                assert_eq!(api.message, "Insufficient balance");
            }
            other => panic!("expected exchange error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_application_nonce_rejection() {
        let err = parse_response(response(
            200,
            r#"{"success":false,"error":"Nonce must be incremented"}"#,
        ))
        .unwrap_err();
        match err {
            CoincheckError::Authentication(api) => {
                assert_eq!(api.status, 200);
                assert!(api.is_invalid_nonce());
            }
            other => panic!("expected authentication error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_application_signature_rejection() {
        let err = parse_response(response(
            200,
            r#"{"success":false,"error":"invalid authentication"}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, CoincheckError::Authentication(_)));
    }

    #[test]
    fn test_parse_nonce_rejection() {
        let err = parse_response(response(
            401,
            r#"{"success":false,"error":"Nonce must be incremented"}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, CoincheckError::Authentication(ref e) if e.is_invalid_nonce()));
    }

    #[test]
    fn test_parse_http_error_with_plain_body() {
        let err = parse_response(response(503, "Service Unavailable")).unwrap_err();
        match err {
            CoincheckError::Exchange(api) => {
                assert_eq!(api.status, 503);
                assert_eq!(api.message, "Service Unavailable");
            }
            other => panic!("expected exchange error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_structured_error_field() {
        let err = parse_response(response(
            400,
            r#"{"success":false,"error":{"amount":["is too small"]}}"#,
        ))
        .unwrap_err();
        let api = err.api_error().unwrap();
        assert!(api.message.contains("is too small"));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = CoincheckRestClient::builder()
            .credentials(Arc::new(crate::auth::StaticCredentials::new("key", "secret")))
            .build();
        let debug = format!("{client:?}");
        assert!(debug.contains("has_credentials: true"));
        assert!(!debug.contains("secret"));
    }
}
