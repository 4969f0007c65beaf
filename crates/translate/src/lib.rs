//! Translators between the personalization document dialects.
//!
//! Every vendor dialect translates to and from the neutral Common dialect:
//!
//! ```text
//!   UO request  ⇄  Common request  ⇄  DY request
//!   IS response ⇄  Common response
//! ```
//!
//! Each direction is a type implementing [`Translator`]. Translators are
//! stateless apart from an injected [`Clock`], so they are `Send + Sync` and
//! can be shared across threads behind an `Arc`.
//!
//! Unknown vocabulary never fails a translation: unmapped actions, page types
//! and event types fall back to the defaults in [`tables`]. Vendor fields that
//! Common cannot model are carried in `user.attributes` under the keys listed
//! in [`escape_hatch`].
//!
//! ## Example
//!
//! ```rust
//! use translate::{CommonToUo, FixedClock, Translator, UoToCommon};
//! use schema::UoRequest;
//!
//! let body = r#"{
//!     "bestMatch": {"country": "US"},
//!     "isEvent": {
//!         "user": {"id": "user-123"},
//!         "action": "Product Detail",
//!         "catalog": {"Product": {"_id": "uo-cardigan-w-2025-001"}}
//!     }
//! }"#;
//! let uo: UoRequest = serde_json::from_str(body).unwrap();
//!
//! let common = UoToCommon::with_clock(FixedClock::from_unix(0)).translate(&uo).unwrap();
//! assert_eq!(common.event.event_type, "product_view");
//! assert_eq!(common.products[0].id, "uo-cardigan-w-2025-001");
//!
//! let back = CommonToUo.translate(&common).unwrap();
//! assert_eq!(back.best_match, uo.best_match);
//! assert_eq!(back.is_event.action, "Product Detail");
//! ```

mod clock;
mod dy;
mod error;
mod response;
pub mod tables;
mod uo;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::dy::{CommonToDy, DyToCommon};
pub use crate::error::TranslateError;
pub use crate::response::{CommonToIs, IsToCommon};
pub use crate::uo::{escape_hatch, CommonToUo, UoToCommon};

/// One translation direction between two document types.
pub trait Translator {
    type Input;
    type Output;

    /// Produces a new output document; the input is never modified.
    fn translate(&self, input: &Self::Input) -> Result<Self::Output, TranslateError>;
}

/// `Some(owned)` for a non-empty string.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn assert_shareable<T: Send + Sync + 'static>(_: &T) {}

    #[test]
    fn translators_are_shareable() {
        assert_shareable(&Arc::new(UoToCommon::new()));
        assert_shareable(&Arc::new(DyToCommon::with_clock(FixedClock::from_unix(0))));
        assert_shareable(&CommonToUo);
        assert_shareable(&CommonToIs);
    }

    #[test]
    fn non_empty_filters_blank() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("web").as_deref(), Some("web"));
    }
}
