//! Shipping methods and the options derived from them.

use serde::{Deserialize, Serialize};

/// Label of the placeholder price attached to every option.
pub const PLACEHOLDER_PRICE_LABEL: &str = "Free";

/// A shipping method as returned by `GET shipping/zones/{id}/methods`.
///
/// Only the fields the client reads are modelled; the rest of the remote
/// object is ignored.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingMethod {
    /// The method type identifier (e.g., `flat_rate`, `free_shipping`).
    #[serde(default)]
    pub method_id: String,

    /// The human-readable method title.
    #[serde(default)]
    pub method_title: String,

    /// Whether the method is enabled in the zone.
    #[serde(default)]
    pub enabled: bool,
}

/// A single price entry of a [`ShippingOption`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingPrice {
    /// The price label shown to the customer.
    pub label: String,
    /// The price amount.
    pub amount: u64,
}

impl ShippingPrice {
    /// The placeholder price: "Free", amount 0.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            label: PLACEHOLDER_PRICE_LABEL.to_string(),
            amount: 0,
        }
    }
}

/// A shipping choice offered to the customer.
///
/// Built fresh from the remote methods on every query; nothing is cached.
///
/// # Pricing
///
/// `prices` always holds the single [`ShippingPrice::placeholder`] entry.
/// The cost settings of the remote method are not read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingOption {
    /// The remote `method_id`.
    pub id: String,
    /// The remote `method_title`.
    pub title: String,
    /// The prices of the option.
    pub prices: Vec<ShippingPrice>,
}

impl From<ShippingMethod> for ShippingOption {
    fn from(method: ShippingMethod) -> Self {
        Self {
            id: method.method_id,
            title: method.method_title,
            prices: vec![ShippingPrice::placeholder()],
        }
    }
}

/// Keeps the enabled methods and projects each into a [`ShippingOption`].
///
/// Order is preserved.
#[must_use]
pub fn enabled_options(methods: Vec<ShippingMethod>) -> Vec<ShippingOption> {
    methods
        .into_iter()
        .filter(|method| method.enabled)
        .map(ShippingOption::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_deserializes_with_missing_fields() {
        let method: ShippingMethod = serde_json::from_value(json!({
            "id": 7,
            "method_id": "x",
            "enabled": false
        }))
        .unwrap();

        assert_eq!(method.method_id, "x");
        assert_eq!(method.method_title, "");
        assert!(!method.enabled);
    }

    #[test]
    fn test_enabled_options_filters_and_projects() {
        let methods: Vec<ShippingMethod> = serde_json::from_value(json!([
            {"method_id": "flat", "method_title": "Flat Rate", "enabled": true},
            {"method_id": "x", "enabled": false},
            {"method_id": "pickup", "method_title": "Local pickup", "enabled": true}
        ]))
        .unwrap();

        let options = enabled_options(methods);

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].id, "flat");
        assert_eq!(options[0].title, "Flat Rate");
        assert_eq!(options[1].id, "pickup");
    }

    #[test]
    fn test_option_serializes_with_placeholder_price() {
        let option = ShippingOption::from(ShippingMethod {
            method_id: "flat".to_string(),
            method_title: "Flat Rate".to_string(),
            enabled: true,
        });

        assert_eq!(
            serde_json::to_value(option).unwrap(),
            json!({
                "id": "flat",
                "title": "Flat Rate",
                "prices": [{"label": "Free", "amount": 0}]
            })
        );
    }

    #[test]
    fn test_enabled_options_empty_input() {
        assert!(enabled_options(Vec::new()).is_empty());
    }
}
