//! The third-party DY choose-API request dialect.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DyChooseRequest {
    pub user: DyUser,
    pub session: DySession,
    pub context: DyContext,
    pub selector: DySelector,
    pub options: DyOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DyUser {
    pub active_consent_accepted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub dyid_server: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dyid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DySession {
    #[serde(deserialize_with = "null_as_default")]
    pub dy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DyContext {
    pub page: DyPage,
    pub device: DyDevice,
}

/// `data` carries product ids for product pages, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DyPage {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub page_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DyDevice {
    #[serde(deserialize_with = "null_as_default")]
    pub user_agent: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub device_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub browser: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DySelector {
    #[serde(deserialize_with = "null_as_default")]
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DyOptions {
    pub is_implicit_pageview: bool,
    pub return_analytics_metadata: bool,
    pub is_implicit_impression_mode: bool,
    pub is_implicit_client_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recs_product_data: Option<DyRecsProductData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DyRecsProductData {
    #[serde(deserialize_with = "null_as_default")]
    pub field_filter: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_names_match_choose_api() {
        let request = DyChooseRequest {
            user: DyUser {
                active_consent_accepted: true,
                dyid_server: "srv".into(),
                dyid: "dy-1".into(),
            },
            options: DyOptions {
                is_implicit_pageview: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let encoded = serde_json::to_value(&request).expect("encodes");

        assert_eq!(encoded["user"]["active_consent_accepted"], true);
        assert_eq!(encoded["user"]["dyid_server"], "srv");
        assert_eq!(encoded["context"]["page"]["type"], "");
        assert_eq!(encoded["context"]["device"]["userAgent"], "");
        assert_eq!(encoded["options"]["isImplicitPageview"], true);
        assert!(encoded["options"].get("recsProductData").is_none());
        assert_eq!(encoded["selector"], json!({"names": []}));
    }

    #[test]
    fn decodes_recs_product_data() {
        let options: DyOptions = serde_json::from_value(json!({
            "returnAnalyticsMetadata": true,
            "recsProductData": {"fieldFilter": ["sku", "price"]}
        }))
        .expect("decodes");

        assert!(options.return_analytics_metadata);
        assert_eq!(
            options.recs_product_data.map(|r| r.field_filter),
            Some(vec!["sku".to_string(), "price".to_string()])
        );
    }
}
