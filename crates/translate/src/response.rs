//! Common ⇄ IS response translators.
//!
//! A pure rename: campaigns map element-wise with count and order preserved,
//! and the flat Common account/entity ids nest under IS `persistedUserId`.

use schema::{
    CommonCampaign, CommonResponse, Document, IsCampaignResponse, IsResponse, PersistedUserId,
};
use tracing::debug;

use crate::{TranslateError, Translator};

#[derive(Debug, Clone, Copy, Default)]
pub struct CommonToIs;

impl Translator for CommonToIs {
    type Input = CommonResponse;
    type Output = IsResponse;

    fn translate(&self, input: &CommonResponse) -> Result<IsResponse, TranslateError> {
        debug!(
            direction = "common-to-is",
            subject_id = input.subject_id(),
            campaigns = input.campaigns.len(),
            "translate"
        );
        Ok(IsResponse {
            id: input.request_id.clone(),
            resolved_user_id: input.user_id.clone(),
            persisted_user_id: PersistedUserId {
                account_id: input.account_id.clone(),
                entity_id: input.entity_id.clone(),
            },
            error_code: input.error_code,
            campaign_responses: input
                .campaigns
                .iter()
                .cloned()
                .map(IsCampaignResponse::from)
                .collect(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsToCommon;

impl Translator for IsToCommon {
    type Input = IsResponse;
    type Output = CommonResponse;

    fn translate(&self, input: &IsResponse) -> Result<CommonResponse, TranslateError> {
        debug!(
            direction = "is-to-common",
            subject_id = input.subject_id(),
            campaigns = input.campaign_responses.len(),
            "translate"
        );
        Ok(CommonResponse {
            request_id: input.id.clone(),
            user_id: input.resolved_user_id.clone(),
            account_id: input.persisted_user_id.account_id.clone(),
            entity_id: input.persisted_user_id.entity_id.clone(),
            error_code: input.error_code,
            campaigns: input
                .campaign_responses
                .iter()
                .cloned()
                .map(CommonCampaign::from)
                .collect(),
        })
    }
}
