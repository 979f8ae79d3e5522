//! Request parameter encoding.
//!
//! Stripe takes request arguments as form-style key/value pairs. Nested
//! objects are expressed by bracketed keys (`metadata[order_id]=6735`) and
//! booleans as the lowercase literals `true` / `false`.
//!
//! Encoding happens in two steps:
//!
//! 1. [`encode_params`] flattens one level of nested mappings and stringifies
//!    booleans, producing a flat [`Params`] mapping.
//! 2. [`to_form_pairs`] renders that mapping into the `(key, value)` string
//!    pairs handed to the transport.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use stripe_api::clients::{encode_params, Params};
//!
//! let params: Params = json!({
//!     "amount": 103,
//!     "metadata": {"order_id": "6735"},
//!     "capture": false
//! })
//! .as_object()
//! .cloned()
//! .unwrap();
//!
//! let encoded = encode_params(params);
//! assert_eq!(encoded["amount"], json!(103));
//! assert_eq!(encoded["metadata[order_id]"], json!("6735"));
//! assert_eq!(encoded["capture"], json!("false"));
//! assert!(!encoded.contains_key("metadata"));
//! ```

use serde_json::{Map, Value};

use crate::clients::errors::InvalidHttpRequestError;

/// Logical request arguments, keyed by parameter name.
pub type Params = Map<String, Value>;

/// Flattens request parameters into Stripe's form convention.
///
/// - A value that is a mapping is replaced by one `outer[inner]` entry per
///   inner key, with the inner value unchanged. Only one level is flattened.
/// - A boolean value becomes the string `"true"` or `"false"`. This applies
///   to top-level values and to values produced by flattening.
/// - Every other value passes through unchanged.
#[must_use]
pub fn encode_params(params: Params) -> Params {
    let mut encoded = Params::new();

    for (key, value) in params {
        match value {
            Value::Object(inner) => {
                for (inner_key, inner_value) in inner {
                    encoded.insert(format!("{key}[{inner_key}]"), encode_scalar(inner_value));
                }
            }
            other => {
                encoded.insert(key, encode_scalar(other));
            }
        }
    }

    encoded
}

fn encode_scalar(value: Value) -> Value {
    match value {
        Value::Bool(b) => Value::String(b.to_string()),
        other => other,
    }
}

/// Renders flattened parameters as form pairs.
///
/// Strings are sent as-is, numbers in their JSON text form, and `null` as the
/// empty string, which Stripe reads as "unset this field".
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::UnsupportedValue`] if a value is still
/// a mapping or a sequence, i.e. the caller nested more than one level deep.
pub fn to_form_pairs(params: &Params) -> Result<Vec<(String, String)>, InvalidHttpRequestError> {
    params
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(InvalidHttpRequestError::UnsupportedValue { key: key.clone() });
                }
            };
            Ok((key.clone(), rendered))
        })
        .collect()
}
