//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so a
//! misconfigured process fails at startup instead of on its first request.
//!
//! # Example
//!
//! ```rust
//! use store_client::{ConfigError, ConsumerKey};
//!
//! let result = ConsumerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`StoreConfig`](crate::StoreConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Consumer key cannot be empty.
    #[error("Consumer key cannot be empty. Please provide a valid WooCommerce consumer key.")]
    EmptyConsumerKey,

    /// Consumer secret cannot be empty.
    #[error("Consumer secret cannot be empty. Please provide a valid WooCommerce consumer secret.")]
    EmptyConsumerSecret,

    /// Store URL is invalid.
    #[error("Invalid store URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://shop.example.com').")]
    InvalidStoreUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Status policy name is not recognised.
    #[error("Invalid status policy '{value}'. Expected 'passthrough' or 'strict'.")]
    InvalidStatusPolicy {
        /// The invalid policy name that was provided.
        value: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is unset or empty.
    #[error("Missing required environment variable '{name}'.")]
    MissingEnvVar {
        /// The name of the environment variable.
        name: &'static str,
    },
}
