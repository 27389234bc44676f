//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so a
//! [`StoreConfig`](super::StoreConfig) can never hold an empty credential.

use crate::error::ConfigError;
use std::fmt;

/// A validated WooCommerce consumer key.
///
/// # Example
///
/// ```rust
/// use store_client::ConsumerKey;
///
/// let key = ConsumerKey::new("ck_123").unwrap();
/// assert_eq!(key.as_ref(), "ck_123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerKey(String);

impl ConsumerKey {
    /// Creates a new validated consumer key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyConsumerKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ConsumerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated WooCommerce consumer secret.
///
/// The `Debug` implementation masks the value, displaying only
/// `ConsumerSecret(*****)`.
///
/// ```rust
/// use store_client::ConsumerSecret;
///
/// let secret = ConsumerSecret::new("cs_456").unwrap();
/// assert_eq!(format!("{:?}", secret), "ConsumerSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerSecret(String);

impl ConsumerSecret {
    /// Creates a new validated consumer secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyConsumerSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ConsumerSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConsumerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConsumerSecret(*****)")
    }
}

/// A validated base URL of a WooCommerce store.
///
/// The URL must have a scheme and a host. It may carry a path (for stores
/// installed under a sub-directory) and a trailing slash; both are kept
/// as given. A query string or fragment is rejected, since endpoint paths
/// are appended to the URL verbatim.
///
/// # Example
///
/// ```rust
/// use store_client::StoreUrl;
///
/// let url = StoreUrl::new("https://shop.example.com/").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "shop.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl StoreUrl {
    /// Creates a new validated store URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreUrl`] if the URL has no scheme,
    /// no host, or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidStoreUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let host_end = url[host_start..]
            .find(&[':', '/', '?', '#'][..])
            .map_or(url.len(), |i| host_start + i);
        if host_start >= host_end || url[host_start..].contains(&['?', '#'][..]) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for StoreUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for StoreUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_key_rejects_empty_string() {
        assert!(matches!(
            ConsumerKey::new(""),
            Err(ConfigError::EmptyConsumerKey)
        ));
    }

    #[test]
    fn test_consumer_secret_rejects_empty_string() {
        assert!(matches!(
            ConsumerSecret::new(""),
            Err(ConfigError::EmptyConsumerSecret)
        ));
    }

    #[test]
    fn test_consumer_secret_masks_value_in_debug() {
        let secret = ConsumerSecret::new("cs_super_secret").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "ConsumerSecret(*****)");
        assert!(!debug_output.contains("cs_super_secret"));
    }

    #[test]
    fn test_store_url_validates_format() {
        let url = StoreUrl::new("https://shop.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "shop.example.com");

        let url = StoreUrl::new("http://localhost:8080/").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");
        assert_eq!(url.as_ref(), "http://localhost:8080/");

        let url = StoreUrl::new("https://example.com/shop").unwrap();
        assert_eq!(url.host_name(), "example.com");
    }

    #[test]
    fn test_store_url_trims_whitespace() {
        let url = StoreUrl::new("  https://shop.example.com \n").unwrap();
        assert_eq!(url.as_ref(), "https://shop.example.com");
    }

    #[test]
    fn test_store_url_rejects_invalid() {
        assert!(StoreUrl::new("shop.example.com").is_err());
        assert!(StoreUrl::new("https://").is_err());
        assert!(StoreUrl::new("https:///path").is_err());
        assert!(StoreUrl::new("://example.com").is_err());
        assert!(StoreUrl::new("ht tp://example.com").is_err());
    }

    #[test]
    fn test_store_url_rejects_query_and_fragment() {
        assert!(matches!(
            StoreUrl::new("https://shop.example.com?x=1"),
            Err(ConfigError::InvalidStoreUrl { .. })
        ));
        assert!(StoreUrl::new("https://shop.example.com/shop/?lang=en").is_err());
        assert!(StoreUrl::new("https://shop.example.com/#top").is_err());
    }
}
