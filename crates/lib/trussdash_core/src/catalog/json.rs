//! Total accessors over an untyped JSON tree.
//!
//! None of these functions fail: a missing key or a value of the wrong shape
//! yields `None`, and callers apply the documented default.

use serde_json::{Map, Value};

/// Member `key` of `value` when `value` is an object.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object()?.get(key)
}

/// Walk a sequence of object keys.
pub fn path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| field(current, key))
}

pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    field(value, key)?.as_str()
}

pub fn bool_field(value: &Value, key: &str) -> Option<bool> {
    field(value, key)?.as_bool()
}

pub fn object_field<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    field(value, key)?.as_object()
}

pub fn array_field<'a>(value: &'a Value, key: &str) -> Option<&'a [Value]> {
    field(value, key)?.as_array().map(Vec::as_slice)
}

/// Resolve a `type` member that is either a plain string or the
/// nullable-union array form (`["null", "string"]`).
///
/// Returns `None` when the member is absent. An array resolves to its first
/// entry other than `"null"`; a non-string entry or an all-`"null"` array
/// resolves to `fallback`.
pub fn type_field(value: &Value, fallback: &str) -> Option<String> {
    let raw = field(value, "type")?;
    let resolved = match raw {
        Value::String(s) => s.clone(),
        Value::Array(entries) => entries
            .iter()
            .find(|t| t.as_str() != Some("null"))
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string(),
        _ => fallback.to_string(),
    };
    Some(resolved)
}

/// Trailing name of a `$ref` pointer (`#/components/schemas/Foo` → `Foo`).
pub fn ref_name(reference: &str) -> String {
    reference.rsplit('/').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn field_on_non_object_is_none() {
        assert!(field(&json!([1, 2]), "a").is_none());
        assert!(field(&json!("text"), "a").is_none());
        assert_eq!(field(&json!({"a": 1}), "a"), Some(&json!(1)));
    }

    #[test]
    fn path_walks_nested_objects() {
        let doc = json!({"components": {"schemas": {"Foo": {}}}});
        assert!(path(&doc, &["components", "schemas", "Foo"]).is_some());
        assert!(path(&doc, &["components", "missing"]).is_none());
    }

    #[test]
    fn typed_accessors_reject_wrong_shapes() {
        let v = json!({"s": 1, "b": "yes", "o": [], "a": {}});
        assert!(str_field(&v, "s").is_none());
        assert!(bool_field(&v, "b").is_none());
        assert!(object_field(&v, "o").is_none());
        assert!(array_field(&v, "a").is_none());
    }

    #[test]
    fn type_field_resolves_nullable_unions() {
        assert_eq!(type_field(&json!({"type": "integer"}), "string").as_deref(), Some("integer"));
        assert_eq!(
            type_field(&json!({"type": ["null", "string"]}), "string").as_deref(),
            Some("string")
        );
        assert_eq!(
            type_field(&json!({"type": ["number", "null"]}), "string").as_deref(),
            Some("number")
        );
        assert_eq!(type_field(&json!({"type": ["null"]}), "string").as_deref(), Some("string"));
        assert_eq!(type_field(&json!({"type": []}), "string").as_deref(), Some("string"));
        assert_eq!(type_field(&json!({"type": 7}), "object").as_deref(), Some("object"));
        assert_eq!(type_field(&json!({}), "string"), None);
    }

    #[test]
    fn ref_name_takes_last_segment() {
        assert_eq!(ref_name("#/components/schemas/Foo"), "Foo");
        assert_eq!(ref_name("Bare"), "Bare");
        assert_eq!(ref_name(""), "");
    }
}
