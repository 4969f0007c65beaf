//! Document models for the personalization converter.
//!
//! Four JSON dialects move through the personalization pipeline:
//!
//! | Dialect | Kind | Root type |
//! |---------|------|-----------|
//! | UO | vendor request | [`UoRequest`] |
//! | DY | third-party choose-API request | [`DyChooseRequest`] |
//! | IS | vendor campaign response | [`IsResponse`] |
//! | Common | neutral hub, request and response | [`CommonRequest`], [`CommonResponse`] |
//!
//! This crate only describes their shapes. Wire names, omission of empty
//! optional fields and lenient decoding (`null` and missing fields become
//! defaults) match what existing producers and consumers of these formats
//! emit. The translations themselves live in the `translate` crate.
//!
//! Open attribute bags are [`DynMap`]s; [`value`] holds the decode-with-default
//! accessors and the approximate [`compare_maps`] used for round-trip checks.
//!
//! ## Example
//!
//! ```
//! use schema::{Document, UoRequest};
//!
//! let body = r#"{"isEvent": {"user": {"id": "u-1"}, "action": "Page View"}}"#;
//! let request: UoRequest = serde_json::from_str(body).unwrap();
//!
//! assert_eq!(request.subject_id(), "u-1");
//! assert!(request.best_match.is_empty());
//! ```

mod common;
mod dy;
mod is;
mod serde_helpers;
mod uo;
pub mod value;

pub use crate::common::{
    CommonCampaign, CommonRequest, CommonResponse, DeviceContext, EventContext, PageContext,
    ProductContext, SessionContext, UserContext,
};
pub use crate::dy::{
    DyChooseRequest, DyContext, DyDevice, DyOptions, DyPage, DyRecsProductData, DySelector,
    DySession, DyUser,
};
pub use crate::is::{IsCampaignResponse, IsResponse, PersistedUserId};
pub use crate::uo::{
    IsEvent, IsEventCatalog, IsEventCategory, IsEventDevice, IsEventProduct, IsEventSource,
    IsEventUser, IsEventUserAttributes, UoRequest,
};
pub use crate::value::{compare_maps, DynMap};

/// A top-level document of one of the dialects.
///
/// `subject_id` is the identifier callers log alongside a translation: the
/// user for requests, the request id for responses.
pub trait Document {
    /// Short dialect name, e.g. `"uo-request"`.
    const KIND: &'static str;

    fn subject_id(&self) -> &str;
}

impl Document for UoRequest {
    const KIND: &'static str = "uo-request";

    fn subject_id(&self) -> &str {
        &self.is_event.user.id
    }
}

impl Document for CommonRequest {
    const KIND: &'static str = "common-request";

    fn subject_id(&self) -> &str {
        &self.user.id
    }
}

impl Document for DyChooseRequest {
    const KIND: &'static str = "dy-request";

    fn subject_id(&self) -> &str {
        &self.user.dyid
    }
}

impl Document for CommonResponse {
    const KIND: &'static str = "common-response";

    fn subject_id(&self) -> &str {
        &self.request_id
    }
}

impl Document for IsResponse {
    const KIND: &'static str = "is-response";

    fn subject_id(&self) -> &str {
        &self.id
    }
}
