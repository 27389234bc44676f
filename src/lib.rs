//! # WooCommerce Store Client
//!
//! A thin async client for the WooCommerce REST API (`/wp-json/wc/v3`),
//! covering the calls an order-taking front end needs: creating and
//! updating orders, creating customers and listing shipping options.
//!
//! ## Overview
//!
//! - Explicit configuration via [`StoreConfig`], loaded from the environment
//!   or built with [`StoreConfigBuilder`]
//! - Validated newtypes for the store URL and credentials
//! - Query-string authentication (`consumer_key`, `consumer_secret`) on
//!   every request
//! - Request logging through `tracing` with credentials redacted
//! - A configurable [`StatusPolicy`] for non-2xx responses
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use store_client::{ContactInfo, StoreClient, StoreConfig};
//! use serde_json::json;
//!
//! let config = StoreConfig::from_env()?;
//! let client = StoreClient::new(&config)?;
//!
//! let item = json!({"product_id": 93, "quantity": 2});
//! let order = client
//!     .create_order(&[item.as_object().unwrap().clone()], "Ring the bell")
//!     .await?;
//! let order_id = order["id"].as_u64().unwrap();
//!
//! let contact = ContactInfo {
//!     name: "Alice".to_string(),
//!     email: "alice@example.com".to_string(),
//!     phone: "+353 1 555 0100".to_string(),
//!     address: None,
//! };
//! client.update_order_info(order_id, &contact).await?;
//!
//! for option in client.get_shipping_options(1).await? {
//!     println!("{}: {}", option.id, option.title);
//! }
//!
//! client.set_order_paid(order_id).await?;
//! ```
//!
//! ## Error Statuses
//!
//! By default the client does not look at the HTTP status. A 4xx/5xx
//! response with a JSON body comes back as a value, and callers check it for
//! WooCommerce's `code`/`message` error fields. A non-JSON body fails with
//! [`HttpError::Parse`]. Build the configuration with
//! [`StatusPolicy::Strict`] to get [`HttpError::Response`] for every non-2xx
//! status instead.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: missing credentials fail at startup
//! - **Thread-safe**: all types are `Send + Sync`
//! - **One request per call**: no retries, no background work

pub mod clients;
pub mod config;
pub mod error;
pub mod store;

pub use config::{
    ConsumerKey, ConsumerSecret, StatusPolicy, StoreConfig, StoreConfigBuilder, StoreUrl,
};
pub use error::ConfigError;

pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

pub use store::{
    Address, ContactInfo, CustomerPayload, LineItem, OrderContactPatch, Party, ShippingMethod,
    ShippingOption, ShippingPrice, StoreClient,
};
