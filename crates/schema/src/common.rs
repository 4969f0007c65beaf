//! The neutral Common dialect every vendor format translates through.
//!
//! ```text
//! CommonRequest
//! ├── personalized, contentfulEnvironment   passthrough
//! ├── bestMatch, queries                    opaque DynMap
//! ├── user      UserContext   (attributes = escape hatch)
//! ├── session   SessionContext
//! ├── event     EventContext
//! ├── page      PageContext
//! ├── products  Vec<ProductContext>
//! ├── device    DeviceContext
//! └── timestamp RFC3339
//! ```
//!
//! Optional fields are `Option` and omitted from JSON when absent; `products`,
//! `segments` and `attributes` are omitted when empty.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serde_helpers::null_as_default;
use crate::value::DynMap;

/// Neutral request document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonRequest {
    pub personalized: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub contentful_environment: String,
    #[serde(deserialize_with = "null_as_default")]
    pub best_match: DynMap,
    #[serde(deserialize_with = "null_as_default")]
    pub queries: DynMap,
    pub user: UserContext,
    pub session: SessionContext,
    pub event: EventContext,
    pub page: PageContext,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub products: Vec<ProductContext>,
    pub device: DeviceContext,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserContext {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub segments: Vec<String>,
    /// Escape hatch for fields the neutral schema has no name for.
    #[serde(
        skip_serializing_if = "DynMap::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub attributes: DynMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionContext {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

/// `event_type` is the normalized vocabulary; `action` and `item_action`
/// keep the vendor's words so they can be restored exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventContext {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub event_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContext {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub page_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductContext {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<DynMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceContext {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Neutral campaign response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub request_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entity_id: String,
    pub error_code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub campaigns: Vec<CommonCampaign>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonCampaign {
    #[serde(deserialize_with = "null_as_default")]
    pub campaign_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub campaign_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub campaign_type: String,
    pub campaign_javascript_content: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub experience_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub experience_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub experience_source_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub campaign_kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_group: String,
    #[serde(deserialize_with = "null_as_default")]
    pub template_names: Vec<String>,
    pub payload: Value,
}
