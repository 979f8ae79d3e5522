//! Stripe resource endpoints.
//!
//! Each submodule adds the endpoints of one resource kind to
//! [`StripeClient`](crate::StripeClient):
//!
//! | Resource | Endpoints |
//! |----------|-----------|
//! | Charge   | create, retrieve, update, capture, list |
//! | Customer | create, retrieve, update, delete, list |
//! | Card     | create, update, delete (under a customer) |
//! | Refund   | create, retrieve, update, list |
//! | Source   | create, retrieve |
//!
//! Resources are returned as generic JSON values rather than fixed schemas.
//! [`ObjectKind`] gives a typed read of the `object` discriminator.

mod card;
mod charge;
mod customer;
mod refund;
mod source;

use std::fmt;

use serde_json::Value;

/// The kind of a Stripe object, read from its `object` field.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stripe_api::ObjectKind;
///
/// let charge = json!({"object": "charge", "id": "ch_1"});
/// assert_eq!(ObjectKind::of(&charge), Some(ObjectKind::Charge));
///
/// let invoice = json!({"object": "invoice"});
/// assert_eq!(ObjectKind::of(&invoice), Some(ObjectKind::Other("invoice".to_string())));
///
/// assert_eq!(ObjectKind::of(&json!([1, 2])), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// `charge`
    Charge,
    /// `customer`
    Customer,
    /// `card`
    Card,
    /// `refund`
    Refund,
    /// `source`
    Source,
    /// `list`, the envelope around paginated collections.
    List,
    /// Any other object type.
    Other(String),
}

impl ObjectKind {
    /// Reads the kind of `value`, if it is a mapping with a string `object` field.
    #[must_use]
    pub fn of(value: &Value) -> Option<Self> {
        value.get("object").and_then(Value::as_str).map(Self::from)
    }

    /// Returns the discriminator string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Charge => "charge",
            Self::Customer => "customer",
            Self::Card => "card",
            Self::Refund => "refund",
            Self::Source => "source",
            Self::List => "list",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ObjectKind {
    fn from(s: &str) -> Self {
        match s {
            "charge" => Self::Charge,
            "customer" => Self::Customer,
            "card" => Self::Card,
            "refund" => Self::Refund,
            "source" => Self::Source,
            "list" => Self::List,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
