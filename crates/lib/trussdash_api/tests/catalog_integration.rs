//! Integration tests: catalog, geometry and health routes.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use trussdash_api::AppState;
use trussdash_api::config::ApiConfig;

use common::{UNREACHABLE_VENDOR, app, get, send};

#[tokio::test]
async fn endpoints_are_sorted_by_tag_then_path() {
    let app = app(UNREACHABLE_VENDOR);
    let (status, json) = get(&app, "/api/catalog/endpoints").await;
    assert_eq!(status, StatusCode::OK);

    let paths: Vec<&str> = json
        .as_array()
        .expect("array")
        .iter()
        .map(|e| e["path"].as_str().expect("path"))
        .collect();
    assert_eq!(paths, vec![
        "/api/ComponentDesigns/{guid}",
        "/api/PlatePairs/getPlateTypeProperties/{plateType}",
        "/api/public/projects",
    ]);

    let design = &json[0];
    assert_eq!(design["method"], "GET");
    assert_eq!(design["tag"], "ComponentDesigns");
    assert_eq!(design["parameters"][0]["in"], "path");
    assert_eq!(design["parameters"][0]["format"], "uuid");
    assert_eq!(design["responseShape"]["elementKind"], "ComponentDesignResponse");
    assert_eq!(design["responseShape"]["isArray"], false);

    let projects = &json[2];
    assert_eq!(projects["responseShape"]["isArray"], true);
    assert_eq!(projects["responseShape"]["elementKind"], "Project");
    assert_eq!(projects["operationId"], "ListProjects");
}

#[tokio::test]
async fn endpoints_can_be_filtered_and_grouped_by_tag() {
    let app = app(UNREACHABLE_VENDOR);

    let (_, json) = get(&app, "/api/catalog/endpoints?tag=PlatePairs").await;
    let filtered = json.as_array().expect("array");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["tag"], "PlatePairs");
    assert!(filtered[0]["responseShape"].is_null());

    let (status, json) = get(&app, "/api/catalog/endpoints/by-tag").await;
    assert_eq!(status, StatusCode::OK);
    let tags: Vec<&String> = json.as_object().expect("object").keys().collect();
    assert_eq!(tags, vec!["ComponentDesigns", "PlatePairs", "Projects"]);
}

#[tokio::test]
async fn schemas_are_listed_and_looked_up_by_name() {
    let app = app(UNREACHABLE_VENDOR);

    let (status, json) = get(&app, "/api/catalog/schemas/Project").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["kind"], "object");
    assert_eq!(json["properties"][0], json!({
        "name": "id", "type": "string", "format": "uuid", "required": true
    }));
    assert_eq!(json["properties"][1]["type"], "string");
    assert_eq!(json["properties"][1]["required"], false);

    let (_, json) = get(&app, "/api/catalog/schemas").await;
    assert_eq!(json.as_object().expect("object").len(), 2);

    let (status, json) = get(&app, "/api/catalog/schemas/Nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn missing_document_serves_an_empty_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ApiConfig {
        document_path: dir.path().join("v1.json"),
        ..common::config(UNREACHABLE_VENDOR)
    };
    let app = trussdash_api::router(AppState::new(config).expect("state"));

    let (status, json) = get(&app, "/api/catalog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "schemas": {}, "endpoints": [] }));

    let (status, json) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["endpointCount"], 0);
    assert_eq!(json["vendorAvailable"], false);
}

#[tokio::test]
async fn document_on_disk_is_read_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("v1.json");
    std::fs::write(&path, common::DOCUMENT).expect("write document");
    let config = ApiConfig {
        document_path: path.clone(),
        ..common::config(UNREACHABLE_VENDOR)
    };
    let app = trussdash_api::router(AppState::new(config).expect("state"));

    let (_, first) = get(&app, "/api/catalog").await;
    std::fs::remove_file(&path).expect("remove document");
    let (_, second) = get(&app, "/api/catalog").await;
    assert_eq!(first, second);
    assert_eq!(second["endpoints"].as_array().expect("array").len(), 3);
}

#[tokio::test]
async fn health_reports_catalog_counts() {
    let app = app(UNREACHABLE_VENDOR);
    let (status, json) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["endpointCount"], 3);
    assert_eq!(json["schemaCount"], 2);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn member_length_is_the_longest_span() {
    let app = app(UNREACHABLE_VENDOR);
    let body = json!({ "points": [
        { "x": 0.0, "y": 0.0 },
        { "x": 1.0, "y": 1.0 },
        { "x": 3.0, "y": 4.0 }
    ]});
    let (status, json) = send(&app, Method::POST, "/api/geometry/member-length", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["length"], 5.0);

    let (_, json) = send(
        &app,
        Method::POST,
        "/api/geometry/member-length",
        Some(json!({ "points": [] })),
    )
    .await;
    assert_eq!(json["length"], 0.0);
}
