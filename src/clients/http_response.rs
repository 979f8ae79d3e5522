//! HTTP response types and response normalization.
//!
//! This module provides the [`HttpResponse`] type, the classified
//! [`ResponseBody`], and [`normalize_response`], which unwraps Stripe's list
//! envelopes into plain sequences.

use std::fmt;

use serde_json::Value;

/// A response body, classified by the response's content type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseBody {
    /// The response declared `application/json` and was decoded.
    Json(Value),
    /// Any other content type, kept as opaque bytes.
    Raw(Vec<u8>),
}

impl ResponseBody {
    /// Returns the decoded JSON value, if this is a JSON body.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Returns the JSON value if it is an object carrying an `object` field.
    ///
    /// # Errors
    ///
    /// Gives the body back unchanged when it is not such an object.
    pub fn into_stripe_object(self) -> Result<Value, Self> {
        match self {
            Self::Json(value) if value.get("object").is_some() => Ok(value),
            other => Err(other),
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Raw(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
        }
    }
}

/// A response received from the Stripe API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The classified response body.
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, body: ResponseBody) -> Self {
        Self { code, body }
    }

    /// Returns `true` only for status 200.
    ///
    /// Stripe answers every successful call with 200, so any other status,
    /// including other 2xx codes, is treated as a failure.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Returns `true` if the body confirms a deletion with `"deleted": true`.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.body
            .as_json()
            .and_then(|body| body.get("deleted"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Returns the `id` field of the body, if present.
    #[must_use]
    pub fn object_id(&self) -> Option<&str> {
        self.body
            .as_json()
            .and_then(|body| body.get("id"))
            .and_then(Value::as_str)
    }
}

/// Recursively unwraps Stripe list envelopes.
///
/// - A sequence is normalized element by element.
/// - A mapping whose `object` field is `"list"` becomes the normalized
///   elements of its `data` field. Paging metadata (`url`, `has_more`,
///   `total_count`) is dropped.
/// - Anything else is returned unchanged.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stripe_api::clients::normalize_response;
///
/// let list = json!({
///     "object": "list",
///     "url": "/v1/charges",
///     "has_more": false,
///     "data": [{"object": "charge", "id": "ch_1"}]
/// });
///
/// assert_eq!(
///     normalize_response(list),
///     json!([{"object": "charge", "id": "ch_1"}])
/// );
/// ```
#[must_use]
pub fn normalize_response(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_response).collect()),
        Value::Object(mut map) if map.get("object").and_then(Value::as_str) == Some("list") => {
            let items = match map.remove("data") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            };
            Value::Array(items.into_iter().map(normalize_response).collect())
        }
        other => other,
    }
}
