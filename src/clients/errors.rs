//! Error types for Stripe API requests.
//!
//! # Error Handling
//!
//! Every request either returns a normalized value or fails with exactly one
//! of these errors:
//!
//! - [`StripeError`]: Any response whose status is not exactly 200
//! - [`DeletionError`]: A DELETE answered with 200 whose body does not confirm the deletion
//! - [`ParseError`]: A 200 response whose body carries no `object` discriminator
//! - [`InvalidHttpRequestError`]: A request rejected before it was sent
//! - [`HttpError`]: Unified error type wrapping all of the above plus transport failures
//!
//! None of them are retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::HttpError;
//!
//! match client.retrieve_charge("ch_123").await {
//!     Ok(charge) => println!("Charge: {charge}"),
//!     Err(HttpError::Stripe(e)) if e.http_code == 404 => println!("No such charge"),
//!     Err(HttpError::Stripe(e)) => println!("Stripe rejected the request: {e}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::clients::http_response::ResponseBody;

/// Error returned when Stripe answers with any status other than 200.
///
/// The fields mirror the `error` object of Stripe's error payload. Each field
/// is empty when the payload does not provide it, including when the body is
/// not JSON at all.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stripe_api::clients::{ResponseBody, StripeError};
///
/// let body = ResponseBody::Json(json!({
///     "error": {"type": "card_error", "message": "Declined", "decline_code": "insufficient_funds"}
/// }));
/// let error = StripeError::from_response(402, &body);
///
/// assert_eq!(error.http_code, 402);
/// assert_eq!(error.decline_code, "insufficient_funds");
/// assert_eq!(
///     error.to_string(),
///     r#"402: card_error: message: "Declined" decline: insufficient_funds"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct StripeError {
    /// The HTTP status code of the response.
    pub http_code: u16,
    /// Error category, e.g. `invalid_request_error` or `card_error`.
    pub error_type: String,
    /// Id of the charge the error relates to.
    pub charge: String,
    /// Human-readable message.
    pub message: String,
    /// Machine-readable error code.
    pub code: String,
    /// Issuer decline code for card errors.
    pub decline_code: String,
    /// Name of the offending request parameter.
    pub param: String,
}

impl StripeError {
    /// Builds a provider error from a non-200 response.
    #[must_use]
    pub fn from_response(http_code: u16, body: &ResponseBody) -> Self {
        let error = body
            .as_json()
            .and_then(|body| body.get("error"))
            .and_then(Value::as_object);

        let field = |name: &str| {
            error
                .and_then(|e| e.get(name))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            http_code,
            error_type: field("type"),
            charge: field("charge"),
            message: field("message"),
            code: field("code"),
            decline_code: field("decline_code"),
            param: field("param"),
        }
    }
}

impl fmt::Display for StripeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.http_code)?;
        if !self.error_type.is_empty() {
            write!(f, " {}:", self.error_type)?;
        }
        if !self.charge.is_empty() {
            write!(f, " charge: {}", self.charge)?;
        }
        if !self.message.is_empty() {
            write!(f, " message: \"{}\"", self.message)?;
        }
        if !self.code.is_empty() {
            write!(f, " code: {}", self.code)?;
        }
        if !self.decline_code.is_empty() {
            write!(f, " decline: {}", self.decline_code)?;
        }
        if !self.param.is_empty() {
            write!(f, " param: {}", self.param)?;
        }
        Ok(())
    }
}

/// Error returned when a DELETE succeeds at the HTTP level but the body does
/// not carry `"deleted": true`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to delete {}", .id.as_deref().unwrap_or("null"))]
pub struct DeletionError {
    /// The `id` reported in the response body, if any.
    pub id: Option<String>,
}

/// Error returned when a successful response is not a Stripe object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Stripe response missing \"object\": {body}")]
pub struct ParseError {
    /// The offending body, rendered as text.
    pub body: String,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A parameter value cannot be form-encoded.
    ///
    /// Only one level of nested mappings is flattened; anything still nested
    /// after flattening is rejected.
    #[error("Parameter '{key}' holds a nested value that cannot be form-encoded.")]
    UnsupportedValue {
        /// The flattened key holding the value.
        key: String,
    },
}

/// Unified error type for all request failures.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_api::HttpError;
///
/// match client.delete_customer("cus_123").await {
///     Ok(()) => {}
///     Err(HttpError::Stripe(e)) => { /* non-200 response */ }
///     Err(HttpError::Deletion(e)) => { /* Stripe did not confirm */ }
///     Err(HttpError::Parse(e)) => { /* body was not a Stripe object */ }
///     Err(HttpError::InvalidRequest(e)) => { /* never sent */ }
///     Err(HttpError::Network(e)) => { /* transport failure */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Stripe answered with a non-200 status.
    #[error(transparent)]
    Stripe(#[from] StripeError),

    /// A deletion was not confirmed.
    #[error(transparent)]
    Deletion(#[from] DeletionError),

    /// The response body was not a Stripe object.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, connection, or body decoding error from the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stripe_error_reads_all_fields() {
        let body = ResponseBody::Json(json!({
            "error": {
                "type": "card_error",
                "charge": "ch_123",
                "message": "Your card was declined.",
                "code": "card_declined",
                "decline_code": "generic_decline",
                "param": "source"
            }
        }));
        let error = StripeError::from_response(402, &body);

        assert_eq!(error.http_code, 402);
        assert_eq!(error.error_type, "card_error");
        assert_eq!(error.charge, "ch_123");
        assert_eq!(error.message, "Your card was declined.");
        assert_eq!(error.code, "card_declined");
        assert_eq!(error.decline_code, "generic_decline");
        assert_eq!(error.param, "source");
        assert_eq!(
            error.to_string(),
            "402: card_error: charge: ch_123 message: \"Your card was declined.\" \
             code: card_declined decline: generic_decline param: source"
        );
    }

    #[test]
    fn test_stripe_error_missing_fields_default_to_empty() {
        let body = ResponseBody::Json(json!({
            "error": {
                "type": "invalid_request_error",
                "message": "msg",
                "param": "source",
                "code": "missing"
            }
        }));
        let error = StripeError::from_response(404, &body);

        assert_eq!(error.error_type, "invalid_request_error");
        assert_eq!(error.charge, "");
        assert_eq!(error.decline_code, "");
        assert_eq!(
            error.to_string(),
            "404: invalid_request_error: message: \"msg\" code: missing param: source"
        );
    }

    #[test]
    fn test_stripe_error_without_error_object() {
        let error = StripeError::from_response(500, &ResponseBody::Json(json!({"id": "x"})));
        assert_eq!(error, StripeError { http_code: 500, ..StripeError::default() });
        assert_eq!(error.to_string(), "500:");
    }

    #[test]
    fn test_stripe_error_from_raw_body() {
        let body = ResponseBody::Raw(b"<html>Bad Gateway</html>".to_vec());
        let error = StripeError::from_response(502, &body);

        assert_eq!(error.http_code, 502);
        assert!(error.message.is_empty());
        assert_eq!(error.to_string(), "502:");
    }

    #[test]
    fn test_stripe_error_ignores_non_string_fields() {
        let body = ResponseBody::Json(json!({"error": {"type": 7, "message": null}}));
        let error = StripeError::from_response(400, &body);

        assert!(error.error_type.is_empty());
        assert!(error.message.is_empty());
    }

    #[test]
    fn test_deletion_error_message() {
        let error = DeletionError {
            id: Some("cus_X".to_string()),
        };
        assert_eq!(error.to_string(), "Failed to delete cus_X");

        let error = DeletionError { id: None };
        assert_eq!(error.to_string(), "Failed to delete null");
    }

    #[test]
    fn test_parse_error_embeds_body() {
        let error = ParseError {
            body: r#"{"amount":103}"#.to_string(),
        };
        assert_eq!(
            error.to_string(),
            r#"Stripe response missing "object": {"amount":103}"#
        );
    }

    #[test]
    fn test_invalid_request_error_messages() {
        assert_eq!(
            InvalidHttpRequestError::EmptyPath.to_string(),
            "Request path cannot be empty."
        );
        let error = InvalidHttpRequestError::UnsupportedValue {
            key: "metadata[inner]".to_string(),
        };
        assert!(error.to_string().contains("metadata[inner]"));
    }

    #[test]
    fn test_http_error_is_transparent() {
        let error: HttpError = DeletionError { id: None }.into();
        assert_eq!(error.to_string(), "Failed to delete null");

        let error: HttpError = StripeError {
            http_code: 401,
            ..StripeError::default()
        }
        .into();
        assert!(matches!(error, HttpError::Stripe(ref e) if e.http_code == 401));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &StripeError::default();
        let _: &dyn std::error::Error = &DeletionError { id: None };
        let _: &dyn std::error::Error = &ParseError {
            body: String::new(),
        };
        let _: &dyn std::error::Error = &InvalidHttpRequestError::EmptyPath;
    }
}
