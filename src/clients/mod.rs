//! HTTP client types for Stripe API communication.
//!
//! This module provides the request/response engine and the types around it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StripeClient`]: High-level client exposing one method per endpoint
//! - [`HttpClient`]: The engine that sends one authenticated request and classifies the result
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`] / [`ResponseBody`]: A received response and its classified body
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`Params`]: Logical request arguments, flattened by [`encode_params`]
//! - [`HttpError`]: Unified error type for every failure a request can produce
//!
//! # Request Flow
//!
//! 1. Parameters are flattened (`metadata[key]`) and booleans stringified.
//! 2. The request is sent with Basic auth, `Stripe-Version`, and a form
//!    `Content-Type`; parameters travel in the query string.
//! 3. A status other than 200 becomes a [`StripeError`].
//! 4. DELETE succeeds only on `"deleted": true` and returns nothing.
//! 5. Any other method requires an `object` field and returns the body with
//!    list envelopes unwrapped by [`normalize_response`].
//!
//! Nothing is retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod params;
mod stripe_client;

pub use errors::{DeletionError, HttpError, InvalidHttpRequestError, ParseError, StripeError};
pub use http_client::{HttpClient, FORM_CONTENT_TYPE, SDK_VERSION, VERSION_HEADER};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{normalize_response, HttpResponse, ResponseBody};
pub use params::{encode_params, to_form_pairs, Params};
pub use stripe_client::StripeClient;

pub(crate) use stripe_client::resource_path;
