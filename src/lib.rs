//! # Stripe API Rust Client
//!
//! A minimal async client for the Stripe REST API, covering charges,
//! customers, cards, refunds, and sources.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StripeConfig`] and [`StripeConfigBuilder`]
//! - Validated newtypes for the secret key and base URL
//! - Dated API version selection via [`ApiVersion`]
//! - Parameter flattening into Stripe's `outer[inner]` form convention
//! - Response normalization that unwraps paginated list envelopes
//! - Typed errors for provider, deletion, parse, and transport failures
//!
//! ## Quick Start
//!
//! ```rust
//! use stripe_api::{ApiVersion, SecretKey, StripeClient, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .secret_key(SecretKey::new("sk_test_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let client = StripeClient::new(&config);
//! assert_eq!(client.api_version().as_str(), "2018-11-08");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use serde_json::json;
//! use stripe_api::{HttpError, SecretKey, StripeClient, StripeConfig};
//!
//! let client = StripeClient::new(&StripeConfig::new(SecretKey::new("sk_test_123")?));
//!
//! let params = json!({"source": "tok_visa", "capture": false})
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//! let charge = client.create_charge(2000, "usd", params).await?;
//!
//! let charges = client.list_charges(Default::default()).await?;
//! for charge in charges.as_array().into_iter().flatten() {
//!     println!("{} {}", charge["id"], charge["amount"]);
//! }
//!
//! match client.delete_customer("cus_123").await {
//!     Ok(()) => println!("deleted"),
//!     Err(HttpError::Stripe(e)) => println!("Stripe error: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No hidden retries**: Every call is exactly one HTTP round trip

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{ApiVersion, BaseUrl, SecretKey, StripeConfig, StripeConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    encode_params, normalize_response, DeletionError, HttpClient, HttpError, HttpMethod,
    HttpRequest, HttpRequestBuilder, HttpResponse, InvalidHttpRequestError, Params, ParseError,
    ResponseBody, StripeClient, StripeError,
};

pub use resources::ObjectKind;
