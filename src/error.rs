//! Error types for client configuration.
//!
//! This module contains the error type returned when a [`StripeConfig`] or
//! one of its validated newtypes cannot be constructed.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! settings are rejected before any request is issued.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::{ConfigError, SecretKey};
//!
//! let result = SecretKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySecretKey)));
//! ```
//!
//! [`StripeConfig`]: crate::StripeConfig

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Secret key cannot be empty.
    #[error("Secret key cannot be empty. Please provide a valid Stripe secret key.")]
    EmptySecretKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.stripe.com/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM-DD' (e.g., '2017-02-14').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// User agent prefix cannot be sent as a header value.
    #[error("Invalid user agent prefix '{prefix}'. Only visible ASCII characters, spaces, and tabs are allowed.")]
    InvalidUserAgentPrefix {
        /// The invalid prefix that was provided.
        prefix: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
