//! Static lookup tables between dialect vocabularies.
//!
//! Each table maps one dialect's term to another's, with an explicit fallback
//! for unmapped input in either direction. Reverse lookups scan the same
//! entries and return the first key whose value matches, so entry order
//! decides the canonical reverse term (`homepage → home`, `cart → Cart`).

/// A fixed string mapping with forward and reverse fallbacks.
#[derive(Debug, Clone, Copy)]
pub struct LookupTable {
    entries: &'static [(&'static str, &'static str)],
    forward_fallback: &'static str,
    reverse_fallback: &'static str,
}

impl LookupTable {
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        forward_fallback: &'static str,
        reverse_fallback: &'static str,
    ) -> Self {
        Self {
            entries,
            forward_fallback,
            reverse_fallback,
        }
    }

    /// Maps a key, or returns the forward fallback when unmapped.
    pub fn forward(&self, key: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(self.forward_fallback)
    }

    /// Maps a value back to its canonical key, or the reverse fallback.
    pub fn reverse(&self, value: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(k, _)| *k)
            .unwrap_or(self.reverse_fallback)
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

/// UO action → Common event type.
pub const ACTION_TO_EVENT_TYPE: LookupTable = LookupTable::new(
    &[
        ("Page View", "page_view"),
        ("Product Detail", "product_view"),
        ("Add to Cart", "add_to_cart"),
        ("Purchase", "purchase"),
        ("CategoryView", "category_view"),
        ("Cart", "cart_view"),
        ("Search", "search"),
        ("Login", "login"),
        ("Signup", "signup"),
        ("ContentView", "page_view"),
    ],
    "page_view",
    "Page View",
);

/// UO page type → Common page type. Case variants collapse to one Common term.
pub const PAGE_TYPE: LookupTable = LookupTable::new(
    &[
        ("home", "homepage"),
        ("homepage", "homepage"),
        ("product", "product"),
        ("category", "category"),
        ("Cart", "cart"),
        ("cart", "cart"),
        ("checkout", "checkout"),
        ("search", "search"),
        ("content", "other"),
    ],
    "other",
    "content",
);

/// Common event type → UO item action, used when the event carries none.
///
/// Forward-only: item actions never map back to an event type, so the reverse
/// fallback is empty.
pub const EVENT_TYPE_TO_ITEM_ACTION: LookupTable = LookupTable::new(
    &[
        ("page_view", "View Category"),
        ("product_view", "View Product"),
        ("add_to_cart", "Add to Cart"),
        ("purchase", "Purchase"),
        ("category_view", "View Category"),
        ("cart_view", "View Cart"),
        ("search", "Search"),
        ("login", "Login"),
        ("signup", "Signup"),
    ],
    "View Category",
    "",
);

/// Common page type → DY page type.
pub const DY_PAGE_TYPE: LookupTable = LookupTable::new(
    &[("homepage", "HOMEPAGE"), ("product", "PRODUCT")],
    "OTHER",
    "other",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_lookups_and_fallbacks() {
        assert_eq!(ACTION_TO_EVENT_TYPE.forward("Product Detail"), "product_view");
        assert_eq!(ACTION_TO_EVENT_TYPE.forward("Wishlist"), "page_view");
        assert_eq!(PAGE_TYPE.forward("Cart"), "cart");
        assert_eq!(PAGE_TYPE.forward("cart"), "cart");
        assert_eq!(PAGE_TYPE.forward("landing"), "other");
        assert_eq!(DY_PAGE_TYPE.forward("category"), "OTHER");
    }

    #[test]
    fn item_action_table_has_no_reverse_fallback() {
        assert_eq!(EVENT_TYPE_TO_ITEM_ACTION.forward("signup"), "Signup");
        assert_eq!(EVENT_TYPE_TO_ITEM_ACTION.forward("wishlist"), "View Category");
        assert_eq!(EVENT_TYPE_TO_ITEM_ACTION.reverse("Quick View"), "");
    }

    #[test]
    fn reverse_prefers_first_entry() {
        assert_eq!(PAGE_TYPE.reverse("homepage"), "home");
        assert_eq!(PAGE_TYPE.reverse("cart"), "Cart");
        assert_eq!(PAGE_TYPE.reverse("other"), "content");
        assert_eq!(PAGE_TYPE.reverse("unknown"), "content");
        assert_eq!(ACTION_TO_EVENT_TYPE.reverse("page_view"), "Page View");
        assert_eq!(ACTION_TO_EVENT_TYPE.reverse("unknown_type"), "Page View");
        assert_eq!(DY_PAGE_TYPE.reverse("PRODUCT"), "product");
        assert_eq!(DY_PAGE_TYPE.reverse("OTHER"), "other");
    }

    #[test]
    fn every_forward_value_reverses_to_a_key_with_that_value() {
        for table in [ACTION_TO_EVENT_TYPE, PAGE_TYPE, DY_PAGE_TYPE] {
            for (_, value) in table.entries() {
                let key = table.reverse(value);
                assert_eq!(table.forward(key), *value);
            }
        }
    }
}
