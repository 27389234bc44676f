//! HTTP transport for the WooCommerce REST API.
//!
//! This module provides the layer below [`StoreClient`](crate::StoreClient):
//! URL construction, query-string authentication, request logging and
//! response handling.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a response, body kept as raw text
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT)
//! - [`HttpError`]: everything the transport can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use store_client::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "orders")
//!     .query_param("status", "processing")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! let orders = response.json()?;
//! ```
//!
//! # Failure Behavior
//!
//! Requests are attempted once. Network failures surface as
//! [`HttpError::Network`]. The HTTP status only matters under
//! [`StatusPolicy::Strict`](crate::StatusPolicy::Strict); by default a
//! 4xx/5xx response is returned like any other.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{
    build_url, HttpClient, API_PREFIX, CLIENT_VERSION, CONSUMER_KEY_PARAM, CONSUMER_SECRET_PARAM,
};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
