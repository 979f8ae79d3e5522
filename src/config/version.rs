//! Stripe API version definitions.
//!
//! This module provides the [`ApiVersion`] enum sent in the `Stripe-Version`
//! header of every request.

use crate::error::ConfigError;
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Stripe API version.
///
/// Stripe pins request/response shapes to a dated version. Two versions are
/// known to this client; any other `YYYY-MM-DD` date may be supplied through
/// the `Custom` variant and is passed through unmodified.
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiVersion;
///
/// assert_eq!(ApiVersion::default(), ApiVersion::V2017_02_14);
/// assert_eq!(ApiVersion::latest().to_string(), "2018-11-08");
///
/// let version: ApiVersion = "2018-11-08".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2018_11_08);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2017-02-14. Used when no version is configured.
    #[default]
    V2017_02_14,
    /// API version 2018-11-08.
    V2018_11_08,
    /// Any other dated version string.
    Custom(String),
}

impl ApiVersion {
    /// Returns the most recent known API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2018_11_08
    }

    /// Returns `true` if this is one of the versions known to this client.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns the known versions in chronological order.
    #[must_use]
    pub fn known_versions() -> Vec<Self> {
        vec![Self::V2017_02_14, Self::V2018_11_08]
    }

    /// Returns the version string exactly as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2017_02_14 => "2017-02-14",
            Self::V2018_11_08 => "2018-11-08",
            Self::Custom(s) => s,
        }
    }

    /// Checks that a `Custom` version is a `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] for any other custom string.
    pub fn verify(&self) -> Result<(), ConfigError> {
        match self {
            Self::Custom(s) if !Self::is_valid_version_format(s) => {
                Err(ConfigError::InvalidApiVersion { version: s.clone() })
            }
            _ => Ok(()),
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        // Stripe versions are calendar dates
        s.len() == 10 && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "2017-02-14" => Ok(Self::V2017_02_14),
            "2018-11-08" => Ok(Self::V2018_11_08),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
