//! Catalog domain models.
//!
//! Flat, serializable view of an OpenAPI document used to drive widget
//! configuration. Every type here is immutable once the catalog is built.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tag assigned to operations that declare none.
pub const DEFAULT_TAG: &str = "Other";

/// The only method retained in the catalog.
pub const GET_METHOD: &str = "GET";

/// A single property of a component schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub name: String,
    /// Primitive type name; `"string"` when undeclared or ambiguous.
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub required: bool,
}

/// A named entry of `components.schemas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaCatalogEntry {
    pub name: String,
    /// `"object"`, `"array"` or a primitive type name.
    pub kind: String,
    /// Properties in declaration order.
    pub properties: Vec<PropertyDescriptor>,
}

impl SchemaCatalogEntry {
    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Where a parameter travels in the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    #[default]
    Query,
    Header,
}

impl ParameterLocation {
    /// Parse the OpenAPI `in` field. Unknown locations fall back to query.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "path" => ParameterLocation::Path,
            "header" => ParameterLocation::Header,
            _ => ParameterLocation::Query,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
        }
    }
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter of a GET operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    pub required: bool,
    #[serde(rename = "type")]
    pub parameter_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Summary of the `200` response body.
///
/// References are kept shallow: `element_kind` is a bare schema name that
/// callers look up in the schema mapping themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseShape {
    pub is_array: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_kind: Option<String>,
}

/// One GET operation of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointCatalogEntry {
    /// Path template with `{param}` placeholders.
    pub path: String,
    pub method: String,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_shape: Option<ResponseShape>,
}

impl EndpointCatalogEntry {
    /// Label shown in the widget endpoint picker.
    pub fn display_name(&self) -> String {
        format!("{}: {}", self.tag, self.path)
    }

    /// Parameters that must be filled in before the endpoint can be called.
    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(|p| p.required)
    }

    /// Required path and query parameters with no non-empty value in `filters`.
    pub fn missing_parameters<'a>(&'a self, filters: &BTreeMap<String, String>) -> Vec<&'a str> {
        self.required_parameters()
            .filter(|p| p.location != ParameterLocation::Header)
            .filter(|p| filters.get(&p.name).is_none_or(|v| v.is_empty()))
            .map(|p| p.name.as_str())
            .collect()
    }
}

/// Combined result of schema and endpoint extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub schemas: BTreeMap<String, SchemaCatalogEntry>,
    /// Sorted by `(tag, path)`.
    pub endpoints: Vec<EndpointCatalogEntry>,
}

impl Catalog {
    /// The catalog produced when the document is unavailable or unreadable.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty() && self.endpoints.is_empty()
    }

    pub fn schema(&self, name: &str) -> Option<&SchemaCatalogEntry> {
        self.schemas.get(name)
    }

    pub fn endpoint(&self, path: &str) -> Option<&EndpointCatalogEntry> {
        self.endpoints.iter().find(|e| e.path == path)
    }

    /// Group endpoints by tag, keeping the relative order of each group.
    pub fn endpoints_by_tag(&self) -> BTreeMap<String, Vec<EndpointCatalogEntry>> {
        let mut groups: BTreeMap<String, Vec<EndpointCatalogEntry>> = BTreeMap::new();
        for endpoint in &self.endpoints {
            groups
                .entry(endpoint.tag.clone())
                .or_default()
                .push(endpoint.clone());
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(tag: &str, path: &str) -> EndpointCatalogEntry {
        EndpointCatalogEntry {
            path: path.to_string(),
            method: GET_METHOD.to_string(),
            tag: tag.to_string(),
            operation_id: None,
            summary: None,
            description: None,
            parameters: Vec::new(),
            response_shape: None,
        }
    }

    #[test]
    fn parameter_location_falls_back_to_query() {
        assert_eq!(ParameterLocation::parse("path"), ParameterLocation::Path);
        assert_eq!(ParameterLocation::parse("header"), ParameterLocation::Header);
        assert_eq!(ParameterLocation::parse("query"), ParameterLocation::Query);
        assert_eq!(ParameterLocation::parse("cookie"), ParameterLocation::Query);
    }

    #[test]
    fn display_name_joins_tag_and_path() {
        assert_eq!(endpoint("Stock", "/widgets").display_name(), "Stock: /widgets");
    }

    fn parameter(name: &str, location: ParameterLocation, required: bool) -> ParameterDescriptor {
        ParameterDescriptor {
            name: name.to_string(),
            location,
            required,
            parameter_type: "string".to_string(),
            format: None,
        }
    }

    #[test]
    fn missing_parameters_lists_unfilled_required_path_and_query() {
        let mut e = endpoint("Designs", "/designs/{guid}");
        e.parameters = vec![
            parameter("guid", ParameterLocation::Path, true),
            parameter("region", ParameterLocation::Query, true),
            parameter("page", ParameterLocation::Query, false),
            parameter("X-Tenant", ParameterLocation::Header, true),
        ];
        assert_eq!(e.required_parameters().count(), 3);

        let filters: BTreeMap<String, String> =
            [("guid".to_string(), "g-1".to_string()), ("region".to_string(), String::new())]
                .into_iter()
                .collect();
        assert_eq!(e.missing_parameters(&filters), vec!["region"]);
        assert_eq!(e.missing_parameters(&BTreeMap::new()), vec!["guid", "region"]);
    }

    #[test]
    fn grouping_preserves_order_within_tag() {
        let catalog = Catalog {
            schemas: BTreeMap::new(),
            endpoints: vec![
                endpoint("A", "/a/1"),
                endpoint("A", "/a/2"),
                endpoint("B", "/b"),
            ],
        };
        let groups = catalog.endpoints_by_tag();
        assert_eq!(groups.len(), 2);
        let paths: Vec<&str> = groups["A"].iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/a/1", "/a/2"]);
        assert_eq!(groups["B"].len(), 1);
    }

    #[test]
    fn response_shape_serializes_camel_case() {
        let shape = ResponseShape {
            is_array: true,
            element_kind: Some("Widget".into()),
            raw_kind: Some("array".into()),
        };
        let json = serde_json::to_value(&shape).expect("serialize");
        assert_eq!(json["isArray"], true);
        assert_eq!(json["elementKind"], "Widget");
        assert_eq!(json["rawKind"], "array");
    }
}
