//! Common ⇄ DY request translators.
//!
//! DY has no room for most Common fields; the DY selector and options travel
//! through Common under `queries.selector` and `queries.options`.

use schema::value::{get_bool, get_map, get_str, get_string_list};
use schema::{
    CommonRequest, DeviceContext, Document, DyChooseRequest, DyContext, DyDevice, DyOptions,
    DyPage, DyRecsProductData, DySelector, DySession, DyUser, DynMap, EventContext, PageContext,
    ProductContext, SessionContext, UserContext,
};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::tables::DY_PAGE_TYPE;
use crate::{non_empty, TranslateError, Translator};

const ACTIVE_CONSENT_ACCEPTED: &str = "active_consent_accepted";
const DYID_SERVER: &str = "dyid_server";
const SELECTOR: &str = "selector";
const OPTIONS: &str = "options";
const PRODUCT_PAGE: &str = "PRODUCT";
const EVENT_SOURCE: &str = "Dynamic Yield";

/// Translates a [`CommonRequest`] into a DY choose request.
///
/// `device.browser` is taken from `device.platform`; the two are treated as
/// the same concept.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonToDy;

impl CommonToDy {
    pub fn new() -> Self {
        Self
    }
}

impl Translator for CommonToDy {
    type Input = CommonRequest;
    type Output = DyChooseRequest;

    fn translate(&self, input: &CommonRequest) -> Result<DyChooseRequest, TranslateError> {
        debug!(direction = "common-to-dy", subject_id = input.subject_id(), "translate");
        let attributes = &input.user.attributes;
        let device = &input.device;

        Ok(DyChooseRequest {
            user: DyUser {
                active_consent_accepted: get_bool(attributes, ACTIVE_CONSENT_ACCEPTED, false),
                dyid_server: get_str(attributes, DYID_SERVER)
                    .unwrap_or_default()
                    .to_owned(),
                dyid: input.user.id.clone(),
            },
            session: DySession {
                dy: input.session.id.clone(),
            },
            context: DyContext {
                page: DyPage {
                    page_type: DY_PAGE_TYPE.forward(&input.page.page_type).to_owned(),
                    data: input.products.iter().map(|p| p.id.clone()).collect(),
                    location: input.page.url.clone(),
                },
                device: DyDevice {
                    user_agent: device.user_agent.clone().unwrap_or_default(),
                    device_type: device.device_type.clone().unwrap_or_default(),
                    browser: device.platform.clone().unwrap_or_default(),
                    ip: device.ip.clone().unwrap_or_default(),
                },
            },
            selector: DySelector {
                names: get_map(&input.queries, SELECTOR)
                    .and_then(|selector| get_string_list(selector, "names"))
                    .unwrap_or_default(),
            },
            options: get_map(&input.queries, OPTIONS)
                .map(extract_options)
                .unwrap_or_default(),
        })
    }
}

fn extract_options(options: &DynMap) -> DyOptions {
    DyOptions {
        is_implicit_pageview: get_bool(options, "isImplicitPageview", false),
        return_analytics_metadata: get_bool(options, "returnAnalyticsMetadata", false),
        is_implicit_impression_mode: get_bool(options, "isImplicitImpressionMode", false),
        is_implicit_client_data: get_bool(options, "isImplicitClientData", false),
        recs_product_data: get_map(options, "recsProductData")
            .and_then(|recs| get_string_list(recs, "fieldFilter"))
            .map(|field_filter| DyRecsProductData { field_filter }),
    }
}

/// Translates a DY choose request into a [`CommonRequest`].
///
/// DY carries no timestamp, so one is always taken from the injected [`Clock`].
#[derive(Debug, Clone, Default)]
pub struct DyToCommon<C = SystemClock> {
    clock: C,
}

impl DyToCommon {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> DyToCommon<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> Translator for DyToCommon<C> {
    type Input = DyChooseRequest;
    type Output = CommonRequest;

    fn translate(&self, input: &DyChooseRequest) -> Result<CommonRequest, TranslateError> {
        debug!(direction = "dy-to-common", subject_id = input.subject_id(), "translate");
        let page = &input.context.page;
        let device = &input.context.device;

        let mut attributes = DynMap::new();
        attributes.insert(
            ACTIVE_CONSENT_ACCEPTED.to_owned(),
            input.user.active_consent_accepted.into(),
        );
        attributes.insert(DYID_SERVER.to_owned(), input.user.dyid_server.clone().into());

        let mut queries = DynMap::new();
        queries.insert(SELECTOR.to_owned(), serde_json::to_value(&input.selector)?);
        queries.insert(OPTIONS.to_owned(), serde_json::to_value(&input.options)?);

        let event_type = if page.page_type == PRODUCT_PAGE {
            "product_view"
        } else {
            "page_view"
        };

        Ok(CommonRequest {
            personalized: true,
            queries,
            user: UserContext {
                id: input.user.dyid.clone(),
                attributes,
                ..UserContext::default()
            },
            session: SessionContext {
                id: input.session.dy.clone(),
                ..SessionContext::default()
            },
            event: EventContext {
                event_type: event_type.to_owned(),
                action: page.page_type.clone(),
                item_action: None,
                source: Some(EVENT_SOURCE.to_owned()),
            },
            page: PageContext {
                page_type: DY_PAGE_TYPE.reverse(&page.page_type).to_owned(),
                url: page.location.clone(),
                ..PageContext::default()
            },
            products: page
                .data
                .iter()
                .map(|id| ProductContext {
                    id: id.clone(),
                    ..ProductContext::default()
                })
                .collect(),
            device: DeviceContext {
                device_type: non_empty(&device.device_type),
                user_agent: non_empty(&device.user_agent),
                ip: non_empty(&device.ip),
                platform: non_empty(&device.browser),
            },
            timestamp: self.clock.rfc3339(),
            ..CommonRequest::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use serde_json::json;

    fn choose_request() -> DyChooseRequest {
        serde_json::from_value(json!({
            "user": {"active_consent_accepted": true, "dyid_server": "srv-42", "dyid": "dy-1001"},
            "session": {"dy": "dy-session-7"},
            "context": {
                "page": {"type": "PRODUCT", "data": ["sku-1", "sku-2"], "location": "https://shop.example.com/p/sku-1"},
                "device": {"userAgent": "Mozilla/5.0", "type": "mobile", "browser": "safari", "ip": "192.0.2.1"}
            },
            "selector": {"names": ["pdp-recs", "hero"]},
            "options": {
                "isImplicitPageview": true,
                "returnAnalyticsMetadata": false,
                "isImplicitImpressionMode": true,
                "isImplicitClientData": false,
                "recsProductData": {"fieldFilter": ["sku", "price"]}
            }
        }))
        .expect("fixture decodes")
    }

    #[test]
    fn dy_to_common_maps_context() {
        let common = DyToCommon::with_clock(FixedClock::from_unix(1_736_937_045))
            .translate(&choose_request())
            .expect("translates");

        assert!(common.personalized);
        assert_eq!(common.user.id, "dy-1001");
        assert_eq!(common.user.attributes["active_consent_accepted"], true);
        assert_eq!(common.user.attributes["dyid_server"], "srv-42");
        assert_eq!(common.session.id, "dy-session-7");
        assert_eq!(common.event.event_type, "product_view");
        assert_eq!(common.event.action, "PRODUCT");
        assert_eq!(common.event.source.as_deref(), Some("Dynamic Yield"));
        assert_eq!(common.page.page_type, "product");
        assert_eq!(common.products.len(), 2);
        assert_eq!(common.products[1].id, "sku-2");
        assert_eq!(common.products[1].price, None);
        assert_eq!(common.device.platform.as_deref(), Some("safari"));
        assert_eq!(common.timestamp, "2025-01-15T10:30:45Z");
        assert_eq!(common.queries["selector"], json!({"names": ["pdp-recs", "hero"]}));
        assert_eq!(
            common.queries["options"]["recsProductData"],
            json!({"fieldFilter": ["sku", "price"]})
        );
    }

    #[test]
    fn round_trip_reproduces_choose_request() {
        let original = choose_request();
        let common = DyToCommon::with_clock(FixedClock::from_unix(0))
            .translate(&original)
            .expect("forward");
        let restored = CommonToDy.translate(&common).expect("reverse");

        assert_eq!(restored, original);
    }

    #[test]
    fn permissive_query_extraction() {
        let mut common = CommonRequest::default();
        common.page.page_type = "homepage".into();
        common.queries = json!({
            "selector": {"names": ["a", 3, "b"]},
            "options": {"isImplicitPageview": "true", "recsProductData": {"fieldFilter": "sku"}}
        })
        .as_object()
        .cloned()
        .expect("object");
        common
            .user
            .attributes
            .insert("active_consent_accepted".into(), json!("yes"));

        let dy = CommonToDy.translate(&common).expect("translates");

        assert_eq!(dy.context.page.page_type, "HOMEPAGE");
        assert_eq!(dy.selector.names, vec!["a".to_string(), "b".to_string()]);
        assert!(!dy.options.is_implicit_pageview);
        assert!(dy.options.recs_product_data.is_none());
        assert!(!dy.user.active_consent_accepted);
        assert_eq!(dy.user.dyid_server, "");
    }

    #[test]
    fn non_product_pages_are_page_views() {
        let mut dy = DyChooseRequest::default();
        dy.context.page.page_type = "CATEGORY".into();

        let common = DyToCommon::with_clock(FixedClock::from_unix(0))
            .translate(&dy)
            .expect("translates");

        assert_eq!(common.event.event_type, "page_view");
        assert_eq!(common.page.page_type, "other");
        let back = CommonToDy.translate(&common).expect("reverse");
        assert_eq!(back.context.page.page_type, "OTHER");
    }
}
