//! GET endpoint extraction from `paths`.

use serde_json::Value;

use super::json;
use super::model::{
    DEFAULT_TAG, EndpointCatalogEntry, GET_METHOD, ParameterDescriptor, ParameterLocation,
    ResponseShape,
};

/// Media types tried, in order, when reading the `200` response schema.
const JSON_MEDIA_TYPES: [&str; 2] = ["application/json", "text/json"];

/// Extract one entry per GET operation, sorted by `(tag, path)`.
///
/// Operations under any other method are skipped. When a path item declares
/// GET under several casings only the first one is kept.
pub fn extract_endpoints(doc: &Value) -> Vec<EndpointCatalogEntry> {
    let Some(paths) = json::object_field(doc, "paths") else {
        return Vec::new();
    };

    let mut endpoints: Vec<EndpointCatalogEntry> = paths
        .iter()
        .filter_map(|(path, item)| {
            let operation = item
                .as_object()?
                .iter()
                .find(|(method, _)| method.eq_ignore_ascii_case(GET_METHOD))
                .map(|(_, op)| op)?;
            Some(extract_endpoint(path, operation))
        })
        .collect();

    // Stable sort keeps document order for identical keys.
    endpoints.sort_by(|a, b| a.tag.cmp(&b.tag).then_with(|| a.path.cmp(&b.path)));
    endpoints
}

fn extract_endpoint(path: &str, operation: &Value) -> EndpointCatalogEntry {
    let tag = json::array_field(operation, "tags")
        .and_then(<[Value]>::first)
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_TAG)
        .to_string();

    let parameters = json::array_field(operation, "parameters")
        .unwrap_or_default()
        .iter()
        .filter(|p| p.is_object())
        .map(extract_parameter)
        .collect();

    EndpointCatalogEntry {
        path: path.to_string(),
        method: GET_METHOD.to_string(),
        tag,
        operation_id: json::str_field(operation, "operationId").map(str::to_string),
        summary: json::str_field(operation, "summary").map(str::to_string),
        description: json::str_field(operation, "description").map(str::to_string),
        parameters,
        response_shape: success_schema(operation).map(response_shape),
    }
}

fn extract_parameter(param: &Value) -> ParameterDescriptor {
    let schema = json::field(param, "schema");
    ParameterDescriptor {
        name: json::str_field(param, "name").unwrap_or_default().to_string(),
        location: json::str_field(param, "in")
            .map(ParameterLocation::parse)
            .unwrap_or_default(),
        required: json::bool_field(param, "required").unwrap_or(false),
        parameter_type: schema
            .and_then(|s| json::str_field(s, "type"))
            .unwrap_or("string")
            .to_string(),
        format: schema
            .and_then(|s| json::str_field(s, "format"))
            .map(str::to_string),
    }
}

/// Schema of the `200` response, negotiated over [`JSON_MEDIA_TYPES`].
///
/// The first media type present wins even when it carries no schema.
fn success_schema(operation: &Value) -> Option<&Value> {
    let content = json::path(operation, &["responses", "200", "content"])?;
    let media = JSON_MEDIA_TYPES
        .iter()
        .find_map(|media_type| json::field(content, media_type))?;
    json::field(media, "schema").filter(|s| s.is_object())
}

fn response_shape(schema: &Value) -> ResponseShape {
    if let Some(reference) = json::str_field(schema, "$ref") {
        return ResponseShape {
            is_array: false,
            element_kind: Some(json::ref_name(reference)),
            raw_kind: None,
        };
    }

    match json::str_field(schema, "type") {
        Some("array") => ResponseShape {
            is_array: true,
            element_kind: json::field(schema, "items")
                .and_then(|items| json::str_field(items, "$ref"))
                .map(json::ref_name),
            raw_kind: Some("array".to_string()),
        },
        declared => ResponseShape {
            is_array: false,
            element_kind: None,
            raw_kind: Some(declared.unwrap_or("object").to_string()),
        },
    }
}
