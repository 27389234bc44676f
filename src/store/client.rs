//! Store client implementation.
//!
//! This module provides the [`StoreClient`] type, which maps order and
//! customer operations onto WooCommerce REST endpoints.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::json;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::StoreConfig;
use crate::store::contact::{ContactInfo, CustomerPayload, OrderContactPatch};
use crate::store::shipping::{enabled_options, ShippingMethod, ShippingOption};
use crate::store::LineItem;

/// Client for the orders, customers and shipping endpoints of a store.
///
/// Every operation issues exactly one HTTP request and waits for its
/// response. Operations share no mutable state, so concurrent calls on the
/// same client are independent of each other.
///
/// # Thread Safety
///
/// `StoreClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use store_client::{StoreClient, StoreConfig};
/// use serde_json::json;
///
/// let config = StoreConfig::from_env()?;
/// let client = StoreClient::new(&config)?;
///
/// let item = json!({"product_id": 93, "quantity": 2});
/// let order = client
///     .create_order(&[item.as_object().unwrap().clone()], "Leave at the door")
///     .await?;
///
/// client.set_order_paid(order["id"].as_u64().unwrap()).await?;
/// ```
#[derive(Debug)]
pub struct StoreClient {
    http_client: HttpClient,
}

// Verify StoreClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreClient>();
};

impl StoreClient {
    /// Creates a new store client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &StoreConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(config)?;

        tracing::debug!(
            store_url = %config.store_url(),
            status_policy = %config.status_policy(),
            "Created store client"
        );

        Ok(Self { http_client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Creates an unpaid order.
    ///
    /// Sends `POST orders` with
    /// `{"set_paid": false, "line_items": line_items, "customer_note": note}`.
    /// Line items are passed through as given; the store validates them.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, or [`HttpError::Parse`]
    /// if the response body is not JSON.
    pub async fn create_order(
        &self,
        line_items: &[LineItem],
        note: &str,
    ) -> Result<serde_json::Value, HttpError> {
        let body = json!({
            "set_paid": false,
            "line_items": line_items,
            "customer_note": note,
        });

        self.post("orders", body).await?.json()
    }

    /// Fetches an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, or [`HttpError::Parse`]
    /// if the response body is not JSON.
    pub async fn get_order(&self, order_id: u64) -> Result<serde_json::Value, HttpError> {
        self.get(&format!("orders/{order_id}"), None).await?.json()
    }

    /// Updates an order with an arbitrary patch.
    ///
    /// Sends `PUT orders/{order_id}` with `patch` as the body, verbatim, and
    /// returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure.
    pub async fn update_order(
        &self,
        order_id: u64,
        patch: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.put(&format!("orders/{order_id}"), patch).await
    }

    /// Sets the shipping and billing details of an order from `contact`.
    ///
    /// Both sections receive the same fields; see [`Party`](crate::Party).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure.
    pub async fn update_order_info(
        &self,
        order_id: u64,
        contact: &ContactInfo,
    ) -> Result<HttpResponse, HttpError> {
        let patch = to_body(&OrderContactPatch::from(contact))?;
        self.update_order(order_id, patch).await
    }

    /// Marks an order as paid.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure.
    pub async fn set_order_paid(&self, order_id: u64) -> Result<HttpResponse, HttpError> {
        self.update_order(order_id, json!({ "set_paid": true })).await
    }

    /// Lists the enabled shipping methods of a zone as [`ShippingOption`]s.
    ///
    /// Each option carries the placeholder price "Free"/0; see
    /// [`ShippingOption`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, or [`HttpError::Parse`]
    /// if the body is not a JSON array of methods.
    pub async fn get_shipping_options(
        &self,
        zone_id: u64,
    ) -> Result<Vec<ShippingOption>, HttpError> {
        let methods: Vec<ShippingMethod> = self
            .get(&format!("shipping/zones/{zone_id}/methods"), None)
            .await?
            .json_as()?;

        let options = enabled_options(methods);
        tracing::debug!(zone_id, count = options.len(), "Resolved shipping options");
        Ok(options)
    }

    /// Creates a customer from `contact`.
    ///
    /// Sends `POST customers` with the email, the name as first name, last
    /// name and username, and identical shipping and billing sections.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, or [`HttpError::Parse`]
    /// if the response body is not JSON.
    pub async fn create_user(&self, contact: &ContactInfo) -> Result<serde_json::Value, HttpError> {
        let body = to_body(&CustomerPayload::from(contact))?;
        self.post("customers", body).await?.json()
    }

    /// Sends a GET request to an endpoint path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for request validation or transport failures.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body to an endpoint path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for request validation or transport failures.
    pub async fn post(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, Some(body), None)
            .await
    }

    /// Sends a PUT request with a JSON body to an endpoint path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for request validation or transport failures.
    pub async fn put(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Put, path, Some(body), None)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, path);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }
        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build()?;
        self.http_client.request(request).await
    }
}

fn to_body<T: Serialize>(payload: &T) -> Result<serde_json::Value, HttpError> {
    serde_json::to_value(payload).map_err(HttpError::Serialize)
}
