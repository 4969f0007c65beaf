use converter::{
    compare_maps, CommonRequest, CommonResponse, CommonToDy, CommonToIs, CommonToUo,
    DyChooseRequest, DyToCommon, FixedClock, IsToCommon, Translator, UoRequest, UoToCommon,
};
use serde_json::json;

const UO_PRODUCT_DETAIL: &str = include_str!("../fixtures/uo_product_detail.json");
const DY_CHOOSE: &str = include_str!("../fixtures/dy_choose.json");
const COMMON_RESPONSE: &str = include_str!("../fixtures/common_response.json");

fn clock() -> FixedClock {
    FixedClock::from_unix(1_736_937_045)
}

fn uo_sample() -> UoRequest {
    serde_json::from_str(UO_PRODUCT_DETAIL).expect("uo fixture decodes")
}

/// UO → JSON → Common → JSON → UO, as a client of the HTTP surface would see it.
fn wire_round_trip(original: &UoRequest) -> UoRequest {
    let common = UoToCommon::with_clock(clock())
        .translate(original)
        .expect("uo to common");
    let common_json = serde_json::to_string(&common).expect("common encodes");
    let common: CommonRequest = serde_json::from_str(&common_json).expect("common decodes");
    CommonToUo.translate(&common).expect("common to uo")
}

#[test]
fn opaque_sections_survive_uo_round_trip() {
    let original = uo_sample();
    let restored = wire_round_trip(&original);

    assert!(compare_maps(&original.best_match, &restored.best_match));
    assert!(compare_maps(&original.queries, &restored.queries));
    assert_eq!(restored.personalized, original.personalized);
    assert_eq!(restored.contentful_environment, "master");
}

#[test]
fn identity_action_and_catalog_survive_uo_round_trip() {
    let original = uo_sample();
    let restored = wire_round_trip(&original);

    assert_eq!(restored.is_event.user.id, original.is_event.user.id);
    assert_eq!(restored.is_event.action, "Product Detail");
    assert_eq!(restored.is_event.item_action, "View Product");
    assert_eq!(restored.is_event.catalog, original.is_event.catalog);
    assert_eq!(
        restored.is_event.catalog.category.as_ref().map(|c| c.id.as_str()),
        Some("womens-sweaters")
    );
    let (before, after) = (
        &original.is_event.user.attributes,
        &restored.is_event.user.attributes,
    );
    assert_eq!(after.customer_auth_status, before.customer_auth_status);
    assert_eq!(after.region_code, before.region_code);
    assert_eq!(after.email, before.email);
    assert_eq!(after.segments, before.segments);
    assert_eq!(after.urbn_is_loyalty, before.urbn_is_loyalty);
    assert_eq!(restored.is_event.timestamp, original.is_event.timestamp);
}

#[test]
fn product_detail_scenario() {
    let original = uo_sample();
    let common = UoToCommon::with_clock(clock())
        .translate(&original)
        .expect("translates");

    assert_eq!(common.event.event_type, "product_view");
    assert_eq!(common.products.len(), 1);
    assert_eq!(common.products[0].id, "uo-cardigan-w-2025-001");
    assert_eq!(common.products[0].brand.as_deref(), Some("Urban Outfitters"));
    assert_eq!(common.user.user_type.as_deref(), Some("member"));
}

#[test]
fn unknown_vocabulary_falls_back() {
    let mut uo = uo_sample();
    uo.is_event.action = "Unknown".into();
    let common = UoToCommon::with_clock(clock())
        .translate(&uo)
        .expect("translates");
    assert_eq!(common.event.event_type, "page_view");

    let mut common = CommonRequest::default();
    common.event.event_type = "unknown_type".into();
    let uo = CommonToUo.translate(&common).expect("translates");
    assert_eq!(uo.is_event.action, "Page View");
}

#[test]
fn page_type_case_normalization() {
    for page_type in ["Cart", "cart"] {
        let mut uo = UoRequest::default();
        uo.is_event.source.page_type = page_type.into();

        let common = UoToCommon::with_clock(clock())
            .translate(&uo)
            .expect("translates");
        assert_eq!(common.page.page_type, "cart");

        let back = CommonToUo.translate(&common).expect("translates");
        assert_eq!(back.is_event.source.page_type, "Cart");
    }
}

#[test]
fn compare_maps_tolerates_type_changes() {
    let a = json!({"include": 5, "active": true});
    let b = json!({"include": "5", "active": "true"});
    let a = a.as_object().expect("object");
    let b = b.as_object().expect("object");

    assert!(compare_maps(a, b));
}

#[test]
fn dy_round_trip_reproduces_document() {
    let original: DyChooseRequest = serde_json::from_str(DY_CHOOSE).expect("dy fixture decodes");

    let common = DyToCommon::with_clock(clock())
        .translate(&original)
        .expect("dy to common");
    let common: CommonRequest =
        serde_json::from_value(serde_json::to_value(&common).expect("encodes")).expect("decodes");
    let restored = CommonToDy.translate(&common).expect("common to dy");

    assert_eq!(restored, original);
}

#[test]
fn campaign_count_is_preserved_both_ways() {
    let common: CommonResponse =
        serde_json::from_str(COMMON_RESPONSE).expect("response fixture decodes");

    let is = CommonToIs.translate(&common).expect("common to is");
    assert_eq!(is.campaign_responses.len(), common.campaigns.len());
    assert_eq!(is.persisted_user_id.account_id, "urbn-us");

    let back = IsToCommon.translate(&is).expect("is to common");
    assert_eq!(back.campaigns.len(), is.campaign_responses.len());
    assert_eq!(back, common);
}
