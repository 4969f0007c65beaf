//! Dynamic values and decode-with-default accessors.
//!
//! Open attribute bags (`attributes`, `bestMatch`, `queries`, `flags`) are
//! [`DynMap`]s of [`serde_json::Value`]. Reading a typed field out of one never
//! fails: a missing key or a value of the wrong type yields the caller's
//! default. These helpers are the only place that policy lives.
//!
//! ```rust
//! use schema::value::{get_bool, get_str, get_string_list};
//! use serde_json::json;
//!
//! let attrs = json!({"active": true, "tier": 3, "names": ["a", 7, "b"]});
//! let attrs = attrs.as_object().unwrap();
//!
//! assert!(get_bool(attrs, "active", false));
//! assert_eq!(get_str(attrs, "tier"), None); // wrong type
//! assert_eq!(get_string_list(attrs, "names"), Some(vec!["a".to_string(), "b".to_string()]));
//! ```

use serde_json::{Map, Value};

/// An open string-keyed mapping of dynamic values.
pub type DynMap = Map<String, Value>;

/// Returns the boolean under `key`, or `default` when missing or not a bool.
pub fn get_bool(map: &DynMap, key: &str, default: bool) -> bool {
    map.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Returns the string under `key` when present and a string.
pub fn get_str<'a>(map: &'a DynMap, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

/// Returns the nested mapping under `key` when present and a mapping.
pub fn get_map<'a>(map: &'a DynMap, key: &str) -> Option<&'a DynMap> {
    map.get(key).and_then(Value::as_object)
}

/// Returns the string elements of the sequence under `key`.
///
/// `None` when the key is missing or not a sequence. Non-string elements are
/// skipped, so a sequence of only numbers yields `Some(vec![])`.
pub fn get_string_list(map: &DynMap, key: &str) -> Option<Vec<String>> {
    let items = map.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
    )
}

/// Approximate equality of two mappings.
///
/// Key counts must match and every key of `a` must exist in `b` with the same
/// [`display_string`]. Values with the same text but different types (`5` and
/// `"5"`) are treated as equal.
pub fn compare_maps(a: &DynMap, b: &DynMap) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|(key, left)| match b.get(key) {
        Some(right) => display_string(left) == display_string(right),
        None => false,
    })
}

/// Renders a value the way the map comparator sees it.
///
/// Strings are bare, `null` is `<nil>`, whole floats drop their fraction,
/// very large or small floats use a signed two-digit exponent, sequences render as `[a b]` and mappings as `map[k:v ...]` with sorted keys.
pub fn display_string(value: &Value) -> String {
    let mut out = String::new();
    write_display(value, &mut out);
    out
}

fn write_display(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("<nil>"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => write_float(f, out),
            _ => out.push_str(&n.to_string()),
        },
        Value::String(s) => out.push_str(s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_display(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push_str("map[");
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(key);
                out.push(':');
                write_display(&map[key.as_str()], out);
            }
            out.push(']');
        }
    }
}

// Shortest digits; exponent form below 1e-4 and from 1e21, with a signed
// two-digit exponent (`1e+21`, `1.5e-07`).
fn write_float(f: f64, out: &mut String) {
    let scientific = format!("{f:e}");
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        out.push_str(&scientific);
        return;
    };
    let exp: i32 = exp.parse().unwrap_or_default();
    if (-4..21).contains(&exp) {
        out.push_str(&f.to_string());
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        out.push_str(&format!("{mantissa}e{sign}{:02}", exp.abs()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> DynMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn get_bool_defaults_on_missing_or_wrong_type() {
        let map = obj(json!({"yes": true, "str": "true"}));
        assert!(get_bool(&map, "yes", false));
        assert!(!get_bool(&map, "str", false));
        assert!(get_bool(&map, "missing", true));
    }

    #[test]
    fn get_string_list_distinguishes_missing_from_empty() {
        let map = obj(json!({"nums": [1, 2], "names": ["x"], "scalar": "x"}));
        assert_eq!(get_string_list(&map, "nums"), Some(vec![]));
        assert_eq!(get_string_list(&map, "names"), Some(vec!["x".to_string()]));
        assert_eq!(get_string_list(&map, "scalar"), None);
        assert_eq!(get_string_list(&map, "missing"), None);
    }

    #[test]
    fn get_map_requires_mapping() {
        let map = obj(json!({"inner": {"a": 1}, "list": []}));
        assert_eq!(get_map(&map, "inner").map(|m| m.len()), Some(1));
        assert!(get_map(&map, "list").is_none());
    }

    #[test]
    fn compare_maps_uses_display_form() {
        let a = obj(json!({"include": 5, "flag": true}));
        let b = obj(json!({"include": "5", "flag": "true"}));
        assert!(compare_maps(&a, &b));
    }

    #[test]
    fn compare_maps_detects_mismatch() {
        let a = obj(json!({"k": "v"}));
        assert!(!compare_maps(&a, &obj(json!({"k": "w"}))));
        assert!(!compare_maps(&a, &obj(json!({"other": "v"}))));
        assert!(!compare_maps(&a, &obj(json!({"k": "v", "extra": 1}))));
        assert!(compare_maps(&DynMap::new(), &DynMap::new()));
    }

    #[test]
    fn display_string_renders_nested_values() {
        let value = json!({"b": [1, "two", null], "a": {"z": 2.0, "y": 1.5}});
        assert_eq!(display_string(&value), "map[a:map[y:1.5 z:2] b:[1 two <nil>]]");
    }

    #[test]
    fn display_string_formats_float_exponents() {
        assert_eq!(display_string(&json!(1e21)), "1e+21");
        assert_eq!(display_string(&json!(2.5e-7)), "2.5e-07");
        assert_eq!(display_string(&json!(1e20)), "100000000000000000000");
        assert_eq!(display_string(&json!(0.0001)), "0.0001");
        assert_eq!(display_string(&json!(-3.0)), "-3");
    }
}
