//! Configuration types for the store client.
//!
//! # Overview
//!
//! - [`StoreConfig`]: the store URL and credentials, plus client settings
//! - [`StoreConfigBuilder`]: a builder for constructing [`StoreConfig`] instances
//! - [`StoreUrl`], [`ConsumerKey`], [`ConsumerSecret`]: validated newtypes
//! - [`StatusPolicy`]: how non-2xx responses are treated
//!
//! A configuration is built once at process start and passed to
//! [`StoreClient::new`](crate::StoreClient::new). Nothing is read from global
//! state after that.
//!
//! # Example
//!
//! ```rust
//! use store_client::{StoreConfig, StoreUrl, ConsumerKey, ConsumerSecret};
//!
//! let config = StoreConfig::builder()
//!     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
//!     .consumer_key(ConsumerKey::new("ck_123").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_456").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod status_policy;

pub use newtypes::{ConsumerKey, ConsumerSecret, StoreUrl};
pub use status_policy::StatusPolicy;

use crate::error::ConfigError;

/// Environment variable holding the store base URL.
pub const ENV_STORE_URL: &str = "WOOCOMMERCE_URL";

/// Environment variable holding the consumer key.
pub const ENV_CONSUMER_KEY: &str = "WOOCOMMERCE_CONSUMER_KEY";

/// Environment variable holding the consumer secret.
pub const ENV_CONSUMER_SECRET: &str = "WOOCOMMERCE_CONSUMER_SECRET";

/// Optional environment variable selecting the [`StatusPolicy`].
pub const ENV_STATUS_POLICY: &str = "WOOCOMMERCE_STATUS_POLICY";

/// Configuration for a [`StoreClient`](crate::StoreClient).
///
/// # Thread Safety
///
/// `StoreConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    store_url: StoreUrl,
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    status_policy: StatusPolicy,
    user_agent_prefix: Option<String>,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Loads the configuration from the process environment.
    ///
    /// Reads [`ENV_STORE_URL`], [`ENV_CONSUMER_KEY`] and
    /// [`ENV_CONSUMER_SECRET`], and optionally [`ENV_STATUS_POLICY`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required variable is
    /// unset or empty, or the validation error of the offending value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    ///
    /// Behaves exactly like [`StoreConfig::from_env`] but reads values from
    /// `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`StoreConfig::from_env`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use store_client::StoreConfig;
    ///
    /// let vars = HashMap::from([
    ///     ("WOOCOMMERCE_URL", "https://shop.example.com"),
    ///     ("WOOCOMMERCE_CONSUMER_KEY", "ck_123"),
    ///     ("WOOCOMMERCE_CONSUMER_SECRET", "cs_456"),
    /// ]);
    ///
    /// let config = StoreConfig::from_lookup(|name| vars.get(name).map(ToString::to_string)).unwrap();
    /// assert_eq!(config.store_url().as_ref(), "https://shop.example.com");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingEnvVar { name })
        };

        let store_url = StoreUrl::new(required(ENV_STORE_URL)?)?;
        let consumer_key = ConsumerKey::new(required(ENV_CONSUMER_KEY)?)?;
        let consumer_secret = ConsumerSecret::new(required(ENV_CONSUMER_SECRET)?)?;

        let mut builder = Self::builder()
            .store_url(store_url)
            .consumer_key(consumer_key)
            .consumer_secret(consumer_secret);

        if let Some(policy) = lookup(ENV_STATUS_POLICY).filter(|value| !value.is_empty()) {
            builder = builder.status_policy(policy.parse()?);
        }

        builder.build()
    }

    /// Returns the store base URL.
    #[must_use]
    pub const fn store_url(&self) -> &StoreUrl {
        &self.store_url
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the status policy.
    #[must_use]
    pub const fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

/// Builder for constructing [`StoreConfig`] instances.
///
/// Required fields are `store_url`, `consumer_key` and `consumer_secret`.
///
/// # Defaults
///
/// - `status_policy`: [`StatusPolicy::Passthrough`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    store_url: Option<StoreUrl>,
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    status_policy: Option<StatusPolicy>,
    user_agent_prefix: Option<String>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store base URL (required).
    #[must_use]
    pub fn store_url(mut self, url: StoreUrl) -> Self {
        self.store_url = Some(url);
        self
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Sets the status policy.
    #[must_use]
    pub const fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = Some(policy);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StoreConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_url`,
    /// `consumer_key` or `consumer_secret` is not set.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let store_url = self
            .store_url
            .ok_or(ConfigError::MissingRequiredField { field: "store_url" })?;
        let consumer_key = self
            .consumer_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_key",
            })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;

        Ok(StoreConfig {
            store_url,
            consumer_key,
            consumer_secret,
            status_policy: self.status_policy.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
