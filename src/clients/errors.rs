//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: non-2xx response rejected under [`StatusPolicy::Strict`](crate::StatusPolicy::Strict)
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type for everything the transport can raise
//!
//! No variant is ever retried; each surfaces directly to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use store_client::HttpError;
//!
//! match client.create_order(&items, "note").await {
//!     Ok(order) => println!("Created order {}", order["id"]),
//!     Err(HttpError::Network(e)) => println!("Store unreachable: {e}"),
//!     Err(HttpError::Parse { code, source }) => println!("Status {code} with non-JSON body: {source}"),
//!     Err(HttpError::Response(e)) => println!("Store returned {}", e.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Serialize(e)) => println!("Bad payload: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a response status is rejected by the status policy.
///
/// The message holds the raw response body, which for the WooCommerce API is
/// usually a JSON object with `code`, `message` and `data` fields.
#[derive(Debug, Error)]
#[error("Store API responded with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// An extra header has an invalid name or value.
    #[error("Invalid header: {name}")]
    InvalidHeader {
        /// The header name as given.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx status rejected under the strict status policy.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, DNS, TLS or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request payload could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The response body is not the JSON the operation expected.
    #[error("Failed to parse response body (status {code}): {source}")]
    Parse {
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
