//! The vendor IS campaign response dialect.
//!
//! Same campaign fields as [`CommonCampaign`](crate::CommonCampaign); the
//! document differs only in naming and in nesting the account and entity ids
//! under `persistedUserId`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::CommonCampaign;
use crate::serde_helpers::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resolved_user_id: String,
    pub persisted_user_id: PersistedUserId,
    pub error_code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub campaign_responses: Vec<IsCampaignResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedUserId {
    #[serde(deserialize_with = "null_as_default")]
    pub account_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entity_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IsCampaignResponse {
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

impl From<CommonCampaign> for IsCampaignResponse {
    fn from(campaign: CommonCampaign) -> Self {
        Self {
            campaign_id: campaign.campaign_id,
            campaign_name: campaign.campaign_name,
            campaign_type: campaign.campaign_type,
            campaign_javascript_content: campaign.campaign_javascript_content,
            experience_id: campaign.experience_id,
            experience_name: campaign.experience_name,
            experience_source_code: campaign.experience_source_code,
            state: campaign.state,
            campaign_kind: campaign.campaign_kind,
            user_group: campaign.user_group,
            template_names: campaign.template_names,
            payload: campaign.payload,
        }
    }
}

impl From<IsCampaignResponse> for CommonCampaign {
    fn from(campaign: IsCampaignResponse) -> Self {
        Self {
            campaign_id: campaign.campaign_id,
            campaign_name: campaign.campaign_name,
            campaign_type: campaign.campaign_type,
            campaign_javascript_content: campaign.campaign_javascript_content,
            experience_id: campaign.experience_id,
            experience_name: campaign.experience_name,
            experience_source_code: campaign.experience_source_code,
            state: campaign.state,
            campaign_kind: campaign.campaign_kind,
            user_group: campaign.user_group,
            template_names: campaign.template_names,
            payload: campaign.payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_nested_persisted_user_id() {
        let response: IsResponse = serde_json::from_value(json!({
            "id": "req-1",
            "resolvedUserId": "u-1",
            "persistedUserId": {"accountId": "acct", "entityId": "ent"},
            "errorCode": 0,
            "campaignResponses": null
        }))
        .expect("decodes");

        assert_eq!(response.persisted_user_id.account_id, "acct");
        assert_eq!(response.persisted_user_id.entity_id, "ent");
        assert!(response.campaign_responses.is_empty());
    }

    #[test]
    fn campaign_conversion_keeps_every_field() {
        let campaign = CommonCampaign {
            campaign_id: "c-1".into(),
            campaign_kind: "banner".into(),
            template_names: vec!["hero".into()],
            payload: json!({"headline": "Fall edit"}),
            campaign_javascript_content: json!("console.log(1)"),
            ..CommonCampaign::default()
        };

        let back = CommonCampaign::from(IsCampaignResponse::from(campaign.clone()));
        assert_eq!(back, campaign);
    }
}
