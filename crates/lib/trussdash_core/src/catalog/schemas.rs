//! Schema extraction from `components.schemas`.

use std::collections::{BTreeMap, HashSet};

use serde_json::Value;

use super::json;
use super::model::{PropertyDescriptor, SchemaCatalogEntry};

/// Extract every named schema into a flat mapping.
///
/// A document without `components.schemas` yields an empty mapping. Malformed
/// entries produce whatever could be read instead of aborting.
pub fn extract_schemas(doc: &Value) -> BTreeMap<String, SchemaCatalogEntry> {
    let Some(schemas) = json::path(doc, &["components", "schemas"]).and_then(Value::as_object)
    else {
        return BTreeMap::new();
    };

    schemas
        .iter()
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, schema)| (name.clone(), extract_schema(name, schema)))
        .collect()
}

fn extract_schema(name: &str, schema: &Value) -> SchemaCatalogEntry {
    let kind = json::type_field(schema, "object").unwrap_or_else(|| "object".to_string());

    let properties = match json::object_field(schema, "properties") {
        Some(properties) => {
            let required = required_names(schema);
            properties
                .iter()
                .map(|(prop_name, prop)| PropertyDescriptor {
                    name: prop_name.clone(),
                    property_type: json::type_field(prop, "string")
                        .unwrap_or_else(|| "string".to_string()),
                    format: json::str_field(prop, "format").map(str::to_string),
                    required: required.contains(prop_name.as_str()),
                })
                .collect()
        }
        None => Vec::new(),
    };

    SchemaCatalogEntry {
        name: name.to_string(),
        kind,
        properties,
    }
}

fn required_names(schema: &Value) -> HashSet<&str> {
    json::array_field(schema, "required")
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_str)
        .collect()
}
