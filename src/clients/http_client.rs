//! HTTP client for Stripe API communication.
//!
//! This module provides the [`HttpClient`] type, which performs one
//! authenticated HTTP call per request and classifies the result.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::clients::errors::{DeletionError, HttpError, ParseError, StripeError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{normalize_response, HttpResponse, ResponseBody};
use crate::clients::params::{encode_params, to_form_pairs};
use crate::config::StripeConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Content type sent with every request.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Header carrying the pinned API version (`Stripe-Version`).
pub const VERSION_HEADER: &str = "stripe-version";

/// HTTP client for making requests to the Stripe API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Basic authentication with the secret key as username and an empty password
/// - The `Stripe-Version` and form `Content-Type` headers
/// - Parameter encoding, response classification, and list normalization
///
/// There is no retry, timeout, or rate limiting here. Timeouts and pool
/// settings belong to the `reqwest::Client` passed to [`HttpClient::with_client`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; concurrent requests share only the
/// underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_api::{HttpClient, HttpMethod, HttpRequest, SecretKey, StripeConfig};
///
/// let config = StripeConfig::new(SecretKey::new("sk_test_123").unwrap());
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/charges/ch_123")
///     .build()
///     .unwrap();
///
/// let charge = client.request(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Shared, read-only configuration.
    config: StripeConfig,
    /// Default headers to include in all requests.
    default_headers: HeaderMap,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client with its own connection pool.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &StripeConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(config, client)
    }

    /// Creates a new HTTP client on top of an existing `reqwest::Client`.
    ///
    /// Use this to share a connection pool or to apply transport settings
    /// such as timeouts and proxies.
    ///
    /// # Panics
    ///
    /// Panics if the version or user agent is not a valid header value.
    /// [`StripeConfigBuilder::build`](crate::StripeConfigBuilder::build)
    /// rejects such configurations, so this cannot happen for a built config.
    #[must_use]
    pub fn with_client(config: &StripeConfig, client: reqwest::Client) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Stripe API Rust Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        default_headers.insert(
            HeaderName::from_static(VERSION_HEADER),
            HeaderValue::from_str(config.api_version().as_str())
                .expect("API version is validated when the config is built"),
        );
        default_headers.insert(
            reqwest::header::USER_AGENT,
            HeaderValue::from_str(&user_agent)
                .expect("user agent prefix is validated when the config is built"),
        );

        Self {
            client,
            config: config.clone(),
            default_headers,
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Sends a request and classifies the response.
    ///
    /// On success, DELETE requests return `None`; every other method returns
    /// the response body with list envelopes unwrapped.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The request fails validation or holds un-encodable parameters (`InvalidRequest`)
    /// - The transport fails or a JSON body cannot be decoded (`Network`)
    /// - The status is not exactly 200 (`Stripe`)
    /// - A DELETE body does not carry `"deleted": true` (`Deletion`)
    /// - Any other body is not an object with an `object` field (`Parse`)
    pub async fn request(&self, request: HttpRequest) -> Result<Option<Value>, HttpError> {
        let response = self.send(&request).await?;

        if !response.is_ok() {
            return Err(StripeError::from_response(response.code, &response.body).into());
        }

        if request.http_method == HttpMethod::Delete {
            if !response.is_deleted() {
                return Err(DeletionError {
                    id: response.object_id().map(String::from),
                }
                .into());
            }
            return Ok(None);
        }

        match response.body.into_stripe_object() {
            Ok(body) => Ok(Some(normalize_response(body))),
            Err(body) => Err(ParseError {
                body: body.to_string(),
            }
            .into()),
        }
    }

    /// Performs the HTTP exchange without interpreting the status.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for invalid requests and
    /// [`HttpError::Network`] for transport failures.
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.config.base_url().join(&request.path);
        let params = to_form_pairs(&encode_params(request.params.clone()))?;

        tracing::debug!(
            method = request.http_method.as_str(),
            path = %request.path,
            version = %self.config.api_version(),
            "Sending Stripe request"
        );

        let res = self
            .client
            .request(request.http_method.into(), &url)
            .headers(self.default_headers.clone())
            .basic_auth(self.config.secret_key().as_ref(), Some(""))
            .query(&params)
            .send()
            .await?;

        let code = res.status().as_u16();
        let is_json = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let body = if is_json {
            ResponseBody::Json(res.json::<Value>().await?)
        } else {
            ResponseBody::Raw(res.bytes().await?.to_vec())
        };

        tracing::debug!(status = code, path = %request.path, "Received Stripe response");

        Ok(HttpResponse::new(code, body))
    }
}
