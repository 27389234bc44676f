//! Contact information and its mapping onto store payloads.
//!
//! The order-taking layer collects a single [`ContactInfo`] per customer.
//! The store API wants that information twice, as a `shipping` and a
//! `billing` [`Party`], and once more flattened into a customer record
//! ([`CustomerPayload`]).

use serde::{Deserialize, Serialize};

/// A postal address as collected from the customer.
///
/// # Example
///
/// ```rust
/// use store_client::Address;
///
/// let address = Address {
///     lines: vec!["12 Harbour Road".to_string(), "Flat 3".to_string()],
///     city: "Cork".to_string(),
///     state: "CO".to_string(),
///     postal_code: "T12 X70A".to_string(),
///     country_code: "IE".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    /// Street lines, most significant first.
    #[serde(default)]
    pub lines: Vec<String>,

    /// The city, town, or village.
    #[serde(default)]
    pub city: String,

    /// The state, province, or county code.
    #[serde(default)]
    pub state: String,

    /// The postal or ZIP code.
    #[serde(default)]
    pub postal_code: String,

    /// The two-letter country code (ISO 3166-1 alpha-2).
    #[serde(default)]
    pub country_code: String,
}

/// Customer details supplied by the order-taking layer.
///
/// There is a single `name` field. Wherever the store expects a first and
/// a last name, both receive this value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContactInfo {
    /// The customer's name.
    pub name: String,

    /// The customer's email address.
    pub email: String,

    /// The customer's phone number.
    pub phone: String,

    /// The delivery address, if one was collected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// A `shipping` or `billing` section of an order or customer.
///
/// Shipping and billing use the same mapping, so one type serves both.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Party {
    /// The contact name.
    pub first_name: String,
    /// The contact name, repeated.
    pub last_name: String,
    /// The contact email address.
    pub email: String,
    /// The contact phone number.
    pub phone: String,

    /// The first street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_1: Option<String>,

    /// The remaining street lines, joined with `", "`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,

    /// The city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The state or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// The postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,

    /// The ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl From<&ContactInfo> for Party {
    fn from(contact: &ContactInfo) -> Self {
        let address = contact.address.as_ref();
        // First line goes to address_1, any further lines are joined into address_2.
        let (address_1, address_2) = address.map_or((None, None), |a| {
            let mut lines = a.lines.iter().map(String::as_str);
            let first = lines.next().unwrap_or_default().to_string();
            let rest = lines.collect::<Vec<_>>().join(", ");
            (Some(first), Some(rest))
        });

        Self {
            first_name: contact.name.clone(),
            last_name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            address_1,
            address_2,
            city: address.map(|a| a.city.clone()),
            state: address.map(|a| a.state.clone()),
            postcode: address.map(|a| a.postal_code.clone()),
            country: address.map(|a| a.country_code.clone()),
        }
    }
}

/// Body of an order update carrying contact details.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderContactPatch {
    /// The shipping section.
    pub shipping: Party,
    /// The billing section, identical to `shipping`.
    pub billing: Party,
}

impl From<&ContactInfo> for OrderContactPatch {
    fn from(contact: &ContactInfo) -> Self {
        let party = Party::from(contact);
        Self {
            shipping: party.clone(),
            billing: party,
        }
    }
}

/// Body of a customer creation request.
///
/// `username` is the contact name, as no separate username is collected.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerPayload {
    /// The customer email address.
    pub email: String,
    /// The contact name.
    pub first_name: String,
    /// The contact name, repeated.
    pub last_name: String,
    /// The contact name, used as the login name.
    pub username: String,
    /// The shipping section.
    pub shipping: Party,
    /// The billing section, identical to `shipping`.
    pub billing: Party,
}

impl From<&ContactInfo> for CustomerPayload {
    fn from(contact: &ContactInfo) -> Self {
        let OrderContactPatch { shipping, billing } = OrderContactPatch::from(contact);
        Self {
            email: contact.email.clone(),
            first_name: contact.name.clone(),
            last_name: contact.name.clone(),
            username: contact.name.clone(),
            shipping,
            billing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> ContactInfo {
        ContactInfo {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: "+353 1 555 0100".to_string(),
            address: Some(Address {
                lines: vec![
                    "12 Harbour Road".to_string(),
                    "Flat 3".to_string(),
                    "Back door".to_string(),
                ],
                city: "Cork".to_string(),
                state: "CO".to_string(),
                postal_code: "T12 X70A".to_string(),
                country_code: "IE".to_string(),
            }),
        }
    }

    #[test]
    fn test_party_uses_name_for_first_and_last_name() {
        let party = Party::from(&alice());
        assert_eq!(party.first_name, "Alice");
        assert_eq!(party.last_name, "Alice");
    }

    #[test]
    fn test_party_maps_address_fields() {
        let value = serde_json::to_value(Party::from(&alice())).unwrap();

        assert_eq!(
            value,
            json!({
                "first_name": "Alice",
                "last_name": "Alice",
                "email": "alice@example.com",
                "phone": "+353 1 555 0100",
                "address_1": "12 Harbour Road",
                "address_2": "Flat 3, Back door",
                "city": "Cork",
                "state": "CO",
                "postcode": "T12 X70A",
                "country": "IE"
            })
        );
    }

    #[test]
    fn test_party_without_address_omits_address_fields() {
        let contact = ContactInfo {
            address: None,
            ..alice()
        };
        let value = serde_json::to_value(Party::from(&contact)).unwrap();

        assert_eq!(
            value,
            json!({
                "first_name": "Alice",
                "last_name": "Alice",
                "email": "alice@example.com",
                "phone": "+353 1 555 0100"
            })
        );
    }

    #[test]
    fn test_party_with_single_address_line() {
        let mut contact = alice();
        if let Some(address) = contact.address.as_mut() {
            address.lines.truncate(1);
        }
        let party = Party::from(&contact);

        assert_eq!(party.address_1.as_deref(), Some("12 Harbour Road"));
        assert_eq!(party.address_2.as_deref(), Some(""));
    }

    #[test]
    fn test_order_contact_patch_has_identical_sections() {
        let patch = OrderContactPatch::from(&alice());
        assert_eq!(patch.shipping, patch.billing);
    }

    #[test]
    fn test_customer_payload_uses_name_as_username() {
        let payload = CustomerPayload::from(&alice());

        assert_eq!(payload.username, "Alice");
        assert_eq!(payload.first_name, "Alice");
        assert_eq!(payload.last_name, "Alice");
        assert_eq!(payload.shipping.first_name, "Alice");
        assert_eq!(payload.billing.last_name, "Alice");
    }

    #[test]
    fn test_contact_info_deserializes_without_address() {
        let contact: ContactInfo = serde_json::from_value(json!({
            "name": "Bob",
            "email": "bob@example.com",
            "phone": "0851234567"
        }))
        .unwrap();

        assert_eq!(contact.name, "Bob");
        assert!(contact.address.is_none());
    }
}
