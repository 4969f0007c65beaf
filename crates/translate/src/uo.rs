//! UO ⇄ Common request translators.
//!
//! UO carries vendor fields Common has no slot for (flags, source channel,
//! item action, catalog, cart). [`UoToCommon`] stashes them under reserved
//! keys of `user.attributes` and [`CommonToUo`] restores them, so a UO
//! document survives a round trip through Common.

use schema::value::{get_bool, get_map, get_str};
use schema::{
    CommonRequest, DeviceContext, Document, DynMap, EventContext, IsEvent, IsEventCatalog,
    IsEventCategory, IsEventDevice, IsEventProduct, IsEventSource, IsEventUser,
    IsEventUserAttributes, PageContext, ProductContext, SessionContext, UoRequest, UserContext,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::tables::{ACTION_TO_EVENT_TYPE, EVENT_TYPE_TO_ITEM_ACTION, PAGE_TYPE};
use crate::{non_empty, TranslateError, Translator};

/// Reserved `user.attributes` keys carrying UO-only fields through Common.
pub mod escape_hatch {
    pub const FLAGS: &str = "flags";
    pub const SOURCE_CHANNEL: &str = "source_channel";
    pub const ITEM_ACTION: &str = "item_action";
    pub const CATALOG: &str = "catalog";
    pub const CART: &str = "cart";
}

const MEMBER: &str = "member";
const GUEST: &str = "guest";
const AUTHORIZED: &str = "AUTHORIZED";
const GUEST_STATUS: &str = "GUEST";
const DEFAULT_PLATFORM: &str = "web";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_LOCALE: &str = "en_US";
const DEFAULT_CHANNEL: &str = "Server";
const DEFAULT_COUNTRY: &str = "US";
const DEFAULT_NOTIFICATION_PERMISSION: &str = "default";

/// Translates a [`UoRequest`] into a [`CommonRequest`].
///
/// Generates a fresh session id and, when the UO event has no timestamp, the
/// current time, both from the injected [`Clock`].
///
/// ```rust
/// use translate::{FixedClock, Translator, UoToCommon};
/// use schema::UoRequest;
///
/// let mut uo = UoRequest::default();
/// uo.is_event.action = "Product Detail".to_string();
///
/// let common = UoToCommon::with_clock(FixedClock::from_unix(0)).translate(&uo).unwrap();
/// assert_eq!(common.event.event_type, "product_view");
/// assert_eq!(common.session.id, "sess_0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UoToCommon<C = SystemClock> {
    clock: C,
}

impl UoToCommon {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> UoToCommon<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> Translator for UoToCommon<C> {
    type Input = UoRequest;
    type Output = CommonRequest;

    fn translate(&self, input: &UoRequest) -> Result<CommonRequest, TranslateError> {
        debug!(direction = "uo-to-common", subject_id = input.subject_id(), "translate");
        let event = &input.is_event;

        let mut user = extract_user(&event.user);
        let attributes = &mut user.attributes;
        attributes.insert(
            escape_hatch::FLAGS.to_owned(),
            Value::Object(event.flags.clone()),
        );
        attributes.insert(
            escape_hatch::SOURCE_CHANNEL.to_owned(),
            event.source.channel.clone().into(),
        );
        attributes.insert(
            escape_hatch::ITEM_ACTION.to_owned(),
            event.item_action.clone().into(),
        );
        attributes.insert(
            escape_hatch::CATALOG.to_owned(),
            serde_json::to_value(&event.catalog)?,
        );
        attributes.insert(
            escape_hatch::CART.to_owned(),
            event.cart.clone().unwrap_or(Value::Null),
        );

        let timestamp = if event.timestamp.is_empty() {
            self.clock.rfc3339()
        } else {
            event.timestamp.clone()
        };

        Ok(CommonRequest {
            personalized: input.personalized,
            contentful_environment: input.contentful_environment.clone(),
            best_match: input.best_match.clone(),
            queries: input.queries.clone(),
            user,
            session: SessionContext {
                id: self.clock.session_id(),
                is_new: Some(true),
                start_time: None,
            },
            event: extract_event(event),
            page: extract_page(&event.source),
            products: extract_products(&event.catalog),
            device: extract_device(event.device.as_ref()),
            timestamp,
        })
    }
}

fn extract_user(user: &IsEventUser) -> UserContext {
    let vendor = &user.attributes;
    let user_type = match vendor.customer_auth_status.as_str() {
        AUTHORIZED => MEMBER,
        _ => GUEST,
    };

    let mut attributes = DynMap::new();
    attributes.insert(
        "customer_auth_status".into(),
        vendor.customer_auth_status.clone().into(),
    );
    attributes.insert(
        "customer_delivery_pass_mbr".into(),
        vendor.customer_delivery_pass_mbr.into(),
    );
    attributes.insert(
        "customer_is_employee".into(),
        vendor.customer_is_employee.into(),
    );
    attributes.insert(
        "customer_non_consent".into(),
        vendor.customer_non_consent.into(),
    );
    attributes.insert("locale".into(), vendor.locale.clone().into());
    attributes.insert("urbn_is_loyalty".into(), vendor.urbn_is_loyalty.into());
    attributes.insert("tier_status".into(), vendor.tier_status.clone().into());
    attributes.insert("countryCode".into(), vendor.country_code.clone().into());
    attributes.insert("regionCode".into(), vendor.region_code.clone().into());

    UserContext {
        id: user.id.clone(),
        email: non_empty(&vendor.email),
        user_type: Some(user_type.to_owned()),
        segments: vendor.segments.clone(),
        attributes,
    }
}

fn extract_event(event: &IsEvent) -> EventContext {
    EventContext {
        event_type: ACTION_TO_EVENT_TYPE.forward(&event.action).to_owned(),
        action: event.action.clone(),
        item_action: non_empty(&event.item_action),
        source: non_empty(&event.source.application),
    }
}

fn extract_page(source: &IsEventSource) -> PageContext {
    PageContext {
        page_type: PAGE_TYPE.forward(&source.page_type).to_owned(),
        url: source.url.clone(),
        referrer: non_empty(&source.referrer),
        title: None,
        language: Some(DEFAULT_LANGUAGE.to_owned()),
    }
}

// The category never becomes a product; it only travels in the catalog stash.
fn extract_products(catalog: &IsEventCatalog) -> Vec<ProductContext> {
    catalog
        .product
        .iter()
        .map(|product| ProductContext {
            id: product.id.clone(),
            name: non_empty(&product.name),
            category: non_empty(&product.category),
            brand: non_empty(&product.brand),
            price: (product.price != 0.0).then_some(product.price),
            currency: non_empty(&product.currency),
            quantity: None,
            attributes: (!product.attributes.is_empty()).then(|| product.attributes.clone()),
        })
        .collect()
}

fn extract_device(device: Option<&IsEventDevice>) -> DeviceContext {
    let mut common = DeviceContext {
        platform: Some(DEFAULT_PLATFORM.to_owned()),
        ..DeviceContext::default()
    };
    if let Some(device) = device {
        common.device_type = non_empty(&device.device_type);
        common.user_agent = non_empty(&device.user_agent);
        common.ip = non_empty(&device.ip);
        if !device.platform.is_empty() {
            common.platform = Some(device.platform.clone());
        }
    }
    common
}

/// Translates a [`CommonRequest`] back into a [`UoRequest`].
///
/// Vendor fields are rebuilt from Common first and then overridden by
/// whatever the reserved `user.attributes` keys carry, when correctly typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonToUo;

impl CommonToUo {
    pub fn new() -> Self {
        Self
    }
}

impl Translator for CommonToUo {
    type Input = CommonRequest;
    type Output = UoRequest;

    fn translate(&self, input: &CommonRequest) -> Result<UoRequest, TranslateError> {
        debug!(direction = "common-to-uo", subject_id = input.subject_id(), "translate");
        let attributes = &input.user.attributes;

        let source = IsEventSource {
            locale: DEFAULT_LOCALE.to_owned(),
            application: input.event.source.clone().unwrap_or_default(),
            url: input.page.url.clone(),
            channel: get_str(attributes, escape_hatch::SOURCE_CHANNEL)
                .unwrap_or(DEFAULT_CHANNEL)
                .to_owned(),
            page_type: PAGE_TYPE.reverse(&input.page.page_type).to_owned(),
            referrer: input.page.referrer.clone().unwrap_or_default(),
        };

        let flags = get_map(attributes, escape_hatch::FLAGS)
            .cloned()
            .unwrap_or_else(default_flags);

        let action = if input.event.action.is_empty() {
            ACTION_TO_EVENT_TYPE
                .reverse(&input.event.event_type)
                .to_owned()
        } else {
            input.event.action.clone()
        };

        let item_action = match input.event.item_action.as_deref() {
            Some(item_action) if !item_action.is_empty() => item_action.to_owned(),
            _ => get_str(attributes, escape_hatch::ITEM_ACTION)
                .unwrap_or_else(|| EVENT_TYPE_TO_ITEM_ACTION.forward(&input.event.event_type))
                .to_owned(),
        };

        let is_event = IsEvent {
            source,
            user: IsEventUser {
                id: input.user.id.clone(),
                attributes: build_user_attributes(&input.user),
            },
            flags,
            action,
            item_action,
            catalog: build_catalog(&input.products, attributes.get(escape_hatch::CATALOG)),
            cart: attributes
                .get(escape_hatch::CART)
                .filter(|cart| !cart.is_null())
                .cloned(),
            device: build_device(&input.device),
            timestamp: input.timestamp.clone(),
        };

        Ok(UoRequest {
            personalized: input.personalized,
            contentful_environment: input.contentful_environment.clone(),
            best_match: input.best_match.clone(),
            queries: input.queries.clone(),
            is_event,
        })
    }
}

fn default_flags() -> DynMap {
    let mut flags = DynMap::new();
    flags.insert("pageView".into(), true.into());
    flags.insert("noCampaigns".into(), false.into());
    flags
}

fn build_user_attributes(user: &UserContext) -> IsEventUserAttributes {
    let is_member = user.user_type.as_deref() == Some(MEMBER);
    let stored = &user.attributes;
    let text = |key: &str, default: &str| get_str(stored, key).unwrap_or(default).to_owned();

    IsEventUserAttributes {
        customer_auth_status: text(
            "customer_auth_status",
            if is_member { AUTHORIZED } else { GUEST_STATUS },
        ),
        customer_delivery_pass_mbr: get_bool(stored, "customer_delivery_pass_mbr", false),
        customer_is_employee: get_bool(stored, "customer_is_employee", false),
        customer_non_consent: get_bool(stored, "customer_non_consent", false),
        locale: text("locale", DEFAULT_LOCALE),
        urbn_is_loyalty: get_bool(stored, "urbn_is_loyalty", is_member),
        tier_status: text("tier_status", ""),
        customer_notification_permission: DEFAULT_NOTIFICATION_PERMISSION.to_owned(),
        country_code: text("countryCode", DEFAULT_COUNTRY),
        region_code: text("regionCode", ""),
        email: user.email.clone().unwrap_or_default(),
        segments: user.segments.clone(),
        ..IsEventUserAttributes::default()
    }
}

/// Builds the catalog from the first product, then merges the stashed one.
///
/// `products[0]` always wins over a stashed `Product`; the stashed product is
/// only used when there are no products. `Category._id` is taken from the
/// stash whenever it is a string, even if the rest of the stash is mistyped.
fn build_catalog(products: &[ProductContext], stashed: Option<&Value>) -> IsEventCatalog {
    let mut catalog = IsEventCatalog {
        product: products.first().map(|product| IsEventProduct {
            id: product.id.clone(),
            name: product.name.clone().unwrap_or_default(),
            category: product.category.clone().unwrap_or_default(),
            brand: product.brand.clone().unwrap_or_default(),
            price: product.price.unwrap_or_default(),
            currency: product.currency.clone().unwrap_or_default(),
            attributes: product.attributes.clone().unwrap_or_default(),
        }),
        category: None,
    };

    let Some(stashed) = stashed.filter(|value| value.is_object()) else {
        return catalog;
    };
    if catalog.product.is_none() {
        catalog.product = stashed
            .get("Product")
            .and_then(|product| IsEventProduct::deserialize(product).ok());
    }
    catalog.category = stashed
        .get("Category")
        .and_then(|category| category.get("_id"))
        .and_then(Value::as_str)
        .map(|id| IsEventCategory { id: id.to_owned() });
    catalog
}

fn build_device(device: &DeviceContext) -> Option<IsEventDevice> {
    let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
    if !(present(&device.device_type) || present(&device.user_agent) || present(&device.ip)) {
        return None;
    }
    Some(IsEventDevice {
        device_type: device.device_type.clone().unwrap_or_default(),
        user_agent: device.user_agent.clone().unwrap_or_default(),
        ip: device.ip.clone().unwrap_or_default(),
        platform: device.platform.clone().unwrap_or_default(),
    })
}
