//! The vendor UO request dialect.
//!
//! Most of the document lives under `isEvent`. Vendor strings use "empty means
//! absent": the optional ones are omitted from JSON when empty, matching what
//! existing UO producers and consumers expect.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serde_helpers::{is_zero_f64, null_as_default};
use crate::value::DynMap;

/// UO personalization request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UoRequest {
    pub personalized: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub contentful_environment: String,
    #[serde(deserialize_with = "null_as_default")]
    pub best_match: DynMap,
    #[serde(deserialize_with = "null_as_default")]
    pub queries: DynMap,
    pub is_event: IsEvent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IsEvent {
    pub source: IsEventSource,
    pub user: IsEventUser,
    #[serde(deserialize_with = "null_as_default")]
    pub flags: DynMap,
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub item_action: String,
    pub catalog: IsEventCatalog,
    /// Opaque cart payload, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<IsEventDevice>,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IsEventSource {
    #[serde(deserialize_with = "null_as_default")]
    pub locale: String,
    #[serde(deserialize_with = "null_as_default")]
    pub application: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub channel: String,
    #[serde(deserialize_with = "null_as_default")]
    pub page_type: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub referrer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsEventUser {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub attributes: IsEventUserAttributes,
}

/// Fixed-shape vendor user attributes. Key names are the vendor's own mix of
/// snake_case and camelCase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsEventUserAttributes {
    #[serde(
        rename = "customerId",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub customer_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_auth_status: String,
    pub customer_is_employee: bool,
    pub customer_delivery_pass_mbr: bool,
    pub customer_non_consent: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub locale: String,
    pub urbn_is_loyalty: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tier_status: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub customer_notification_permission: String,
    pub urbn_mbr_a: bool,
    pub urbn_mbr_b: bool,
    pub urbn_mbr_market_a: bool,
    pub urbn_mbr_market_b: bool,
    #[serde(rename = "countryCode", deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(
        rename = "regionCode",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub region_code: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(
        rename = "loyaltyTier",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub loyalty_tier: String,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub segments: Vec<String>,
}

/// Catalog context: a product, a category, both or neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsEventCatalog {
    #[serde(rename = "Product", skip_serializing_if = "Option::is_none")]
    pub product: Option<IsEventProduct>,
    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<IsEventCategory>,
}

impl IsEventCatalog {
    pub fn is_empty(&self) -> bool {
        self.product.is_none() && self.category.is_none()
    }
}

/// Catalog product, keyed by `_id` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IsEventProduct {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub brand: String,
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "DynMap::is_empty", deserialize_with = "null_as_default")]
    pub attributes: DynMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsEventCategory {
    #[serde(rename = "_id", default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IsEventDevice {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub device_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub platform: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_vendor_document() {
        let request: UoRequest = serde_json::from_value(json!({
            "personalized": true,
            "contentfulEnvironment": "master",
            "bestMatch": {"country": "US"},
            "queries": {},
            "isEvent": {
                "source": {"locale": "en_US", "application": "web", "url": "/p", "channel": "Server", "pageType": "product"},
                "user": {"id": "u-1", "attributes": {"customer_auth_status": "AUTHORIZED", "urbn_is_loyalty": true, "countryCode": "US"}},
                "flags": {"pageView": true},
                "action": "Product Detail",
                "catalog": {"Product": {"_id": "p-1", "price": 69.99}, "Category": {"_id": "c-1"}},
                "timestamp": "2025-01-15T10:30:45Z"
            }
        }))
        .expect("decodes");

        let event = &request.is_event;
        assert_eq!(event.source.page_type, "product");
        assert!(event.user.attributes.urbn_is_loyalty);
        assert_eq!(event.catalog.product.as_ref().map(|p| p.price), Some(69.99));
        assert_eq!(
            event.catalog.category.as_ref().map(|c| c.id.as_str()),
            Some("c-1")
        );
        assert!(event.device.is_none());
        assert!(event.cart.is_none());
    }

    #[test]
    fn empty_vendor_strings_are_omitted() {
        let event = IsEvent::default();
        let encoded = serde_json::to_value(&event).expect("encodes");

        assert!(encoded.get("itemAction").is_none());
        assert!(encoded.get("cart").is_none());
        assert!(encoded.get("device").is_none());
        assert!(encoded.get("timestamp").is_none());
        assert_eq!(encoded["catalog"], json!({}));
        assert!(encoded["source"].get("referrer").is_none());

        let attrs = &encoded["user"]["attributes"];
        assert_eq!(attrs["customer_auth_status"], "");
        assert_eq!(attrs["customer_is_employee"], false);
        assert!(attrs.get("email").is_none());
        assert!(attrs.get("regionCode").is_none());
        assert!(attrs.get("customerId").is_none());
    }

    #[test]
    fn mistyped_catalog_does_not_decode() {
        let result: Result<IsEventCatalog, _> =
            serde_json::from_value(json!({"Product": {"_id": "p-1", "price": "cheap"}}));
        assert!(result.is_err());
    }
}
