//! Serialization helpers shared by the document models.
//!
//! Vendor producers omit zero values and send `null` for empty collections, so
//! the models need small predicates for `skip_serializing_if` and a lenient
//! deserializer that maps `null` to the type's default.

use serde::{Deserialize, Deserializer};

/// `skip_serializing_if` predicate for prices omitted when zero.
pub(crate) fn is_zero_f64(value: &f64) -> bool {
    *value == 0.0
}

/// Deserialize `null` (or a missing field, together with `#[serde(default)]`)
/// as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
