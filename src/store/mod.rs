//! Order, customer and shipping operations against a WooCommerce store.
//!
//! The main types in this module are:
//!
//! - [`StoreClient`]: the domain-level client
//! - [`ContactInfo`] and [`Address`]: customer details from the order-taking layer
//! - [`Party`], [`OrderContactPatch`], [`CustomerPayload`]: the payloads built from them
//! - [`ShippingMethod`] and [`ShippingOption`]: remote methods and their projection
//!
//! Payloads the client does not interpret (line items, order patches) stay
//! loosely typed as JSON so the store may accept fields this crate does not
//! know about.

mod client;
mod contact;
mod shipping;

pub use client::StoreClient;
pub use contact::{Address, ContactInfo, CustomerPayload, OrderContactPatch, Party};
pub use shipping::{
    enabled_options, ShippingMethod, ShippingOption, ShippingPrice, PLACEHOLDER_PRICE_LABEL,
};

/// One order line, passed to the store unmodified.
///
/// Typically `{"product_id": 93, "quantity": 2}`, optionally with
/// `variation_id`, `meta_data` and so on.
pub type LineItem = serde_json::Map<String, serde_json::Value>;
