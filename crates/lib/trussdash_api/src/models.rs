//! Request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use trussdash_core::geometry::GeometryPoint;

/// Error body returned by every failing handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub endpoint_count: usize,
    pub schema_count: usize,
    pub vendor_available: bool,
}

/// `?tag=` filter for the endpoint listing.
#[derive(Debug, Default, Deserialize)]
pub struct EndpointsQuery {
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberLengthRequest {
    pub points: Vec<GeometryPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberLengthResponse {
    pub length: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDashboardRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectDashboardRequest {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveWidgetRequest {
    pub row: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResizeWidgetRequest {
    pub width: u32,
    pub height: u32,
}

/// Live data for a widget along with the request that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDataResponse {
    pub widget_id: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    /// `null` when the vendor returned an empty body.
    pub data: Value,
}
