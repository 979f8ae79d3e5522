//! Configuration types for the Stripe client.
//!
//! This module provides the configuration shared, read-only, by every request
//! a client issues.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StripeConfig`]: The configuration struct holding credentials and version
//! - [`StripeConfigBuilder`]: A builder for constructing [`StripeConfig`] instances
//! - [`SecretKey`]: A validated secret key with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//! - [`ApiVersion`]: The Stripe API version to request
//!
//! # Example
//!
//! ```rust
//! use stripe_api::{ApiVersion, SecretKey, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .secret_key(SecretKey::new("sk_test_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{BaseUrl, SecretKey};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Stripe client.
///
/// Immutable after construction. It is `Clone`, `Send`, and `Sync`, so one
/// instance can back any number of concurrent requests.
///
/// # Example
///
/// ```rust
/// use stripe_api::{SecretKey, StripeConfig};
///
/// let config = StripeConfig::new(SecretKey::new("sk_test_123").unwrap());
/// assert_eq!(config.base_url().as_ref(), "https://api.stripe.com/v1");
/// assert_eq!(config.api_version().as_str(), "2017-02-14");
/// ```
#[derive(Clone, Debug)]
pub struct StripeConfig {
    secret_key: SecretKey,
    api_version: ApiVersion,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl StripeConfig {
    /// Creates a configuration with the given secret and default settings.
    #[must_use]
    pub fn new(secret_key: SecretKey) -> Self {
        Self {
            secret_key,
            api_version: ApiVersion::default(),
            base_url: BaseUrl::default(),
            user_agent_prefix: None,
        }
    }

    /// Creates a new builder for constructing a `StripeConfig`.
    #[must_use]
    pub fn builder() -> StripeConfigBuilder {
        StripeConfigBuilder::new()
    }

    /// Returns the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StripeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeConfig>();
};

/// Builder for constructing [`StripeConfig`] instances.
///
/// `secret_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::V2017_02_14`]
/// - `base_url`: `https://api.stripe.com/v1`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use stripe_api::{ApiVersion, BaseUrl, SecretKey, StripeConfig};
///
/// let config = StripeConfig::builder()
///     .secret_key(SecretKey::new("sk_test_123").unwrap())
///     .api_version(ApiVersion::V2018_11_08)
///     .base_url(BaseUrl::new("http://localhost:12111/v1").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StripeConfigBuilder {
    secret_key: Option<SecretKey>,
    api_version: Option<ApiVersion>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl StripeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the secret key (required).
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StripeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `secret_key` is not set,
    /// [`ConfigError::InvalidApiVersion`] if a custom version is not a
    /// `YYYY-MM-DD` date, and [`ConfigError::InvalidUserAgentPrefix`] if the
    /// prefix holds characters a header value cannot carry.
    pub fn build(self) -> Result<StripeConfig, ConfigError> {
        let secret_key = self.secret_key.ok_or(ConfigError::MissingRequiredField {
            field: "secret_key",
        })?;

        let api_version = self.api_version.unwrap_or_default();
        api_version.verify()?;

        if let Some(prefix) = &self.user_agent_prefix {
            if !is_header_safe(prefix) {
                return Err(ConfigError::InvalidUserAgentPrefix {
                    prefix: prefix.clone(),
                });
            }
        }

        Ok(StripeConfig {
            secret_key,
            api_version,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

fn is_header_safe(value: &str) -> bool {
    value.bytes().all(|b| b == b'\t' || (b' '..=b'~').contains(&b))
}
