//! High-level client for the Stripe REST API.
//!
//! This module provides [`StripeClient`], which wraps an [`HttpClient`] with
//! `get`/`post`/`delete` helpers. The per-resource endpoints (charges,
//! customers, cards, refunds, sources) live in [`crate::resources`] as
//! further `impl StripeClient` blocks.

use serde_json::Value;

use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::params::Params;
use crate::config::{ApiVersion, StripeConfig};

/// Async client for the Stripe REST API.
///
/// Every endpoint method is one call to the underlying [`HttpClient`] with a
/// method, a path, and parameters. Responses are returned as generic JSON
/// values; list endpoints return a JSON array.
///
/// # Thread Safety
///
/// `StripeClient` is `Clone + Send + Sync`. Clones share the connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use stripe_api::{SecretKey, StripeClient, StripeConfig};
///
/// let config = StripeConfig::new(SecretKey::new("sk_test_123").unwrap());
/// let client = StripeClient::new(&config);
///
/// let params = json!({"metadata": {"order_id": "6735"}}).as_object().cloned().unwrap();
/// let charge = client.create_charge(2000, "usd", params).await?;
/// println!("Created {}", charge["id"]);
/// ```
#[derive(Debug, Clone)]
pub struct StripeClient {
    http_client: HttpClient,
}

// Verify StripeClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeClient>();
};

impl StripeClient {
    /// Creates a new client with its own connection pool.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. See
    /// [`HttpClient::new`].
    #[must_use]
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Creates a new client on top of an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(config: &StripeConfig, client: reqwest::Client) -> Self {
        Self {
            http_client: HttpClient::with_client(config, client),
        }
    }

    /// Returns the API version sent with every request.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        self.http_client.config().api_version()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, path: &str, params: Params) -> Result<Value, HttpError> {
        self.fetch(HttpMethod::Get, path, params).await
    }

    /// Sends a POST request to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn post(&self, path: &str, params: Params) -> Result<Value, HttpError> {
        self.fetch(HttpMethod::Post, path, params).await
    }

    /// Sends a DELETE request to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Deletion`] if Stripe does not confirm the
    /// deletion, or any other [`HttpError`] if the request fails.
    pub async fn delete(&self, path: &str) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.http_client.request(request).await?;
        Ok(())
    }

    async fn fetch(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(method, path).params(params).build()?;
        match self.http_client.request(request).await? {
            Some(body) => Ok(body),
            None => Ok(Value::Null),
        }
    }
}

/// Builds a resource path from a template prefix and percent-encoded ids.
///
/// ```rust,ignore
/// assert_eq!(resource_path("customers", &["cus 1", "sources"]), "/customers/cus%201/sources");
/// ```
pub(crate) fn resource_path(collection: &str, segments: &[&str]) -> String {
    let mut path = format!("/{collection}");
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}
