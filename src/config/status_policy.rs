//! How the client treats non-2xx HTTP statuses.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Policy applied to the HTTP status of every response.
///
/// The WooCommerce REST API reports failures as JSON bodies such as
/// `{"code": "woocommerce_rest_invalid_id", "message": "...", "data": {"status": 404}}`.
/// Under [`StatusPolicy::Passthrough`] those bodies are handed back to the
/// caller exactly like a success, and it is up to the caller to look for the
/// error markers. [`StatusPolicy::Strict`] turns every non-2xx status into an
/// [`HttpError::Response`](crate::HttpError::Response) instead.
///
/// # Example
///
/// ```rust
/// use store_client::StatusPolicy;
///
/// let policy: StatusPolicy = "strict".parse().unwrap();
/// assert_eq!(policy, StatusPolicy::Strict);
/// assert_eq!(StatusPolicy::default(), StatusPolicy::Passthrough);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusPolicy {
    /// Ignore the status; only body parsing can fail.
    #[default]
    Passthrough,
    /// Reject any status outside 200..=299.
    Strict,
}

impl StatusPolicy {
    /// Returns `true` if a response with this status code should be rejected.
    #[must_use]
    pub const fn rejects(&self, code: u16) -> bool {
        match self {
            Self::Passthrough => false,
            Self::Strict => !matches!(code, 200..=299),
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passthrough => f.write_str("passthrough"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for StatusPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passthrough" => Ok(Self::Passthrough),
            "strict" => Ok(Self::Strict),
            _ => Err(ConfigError::InvalidStatusPolicy {
                value: s.to_string(),
            }),
        }
    }
}
