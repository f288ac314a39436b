//! Shared helpers for API integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use trussdash_api::AppState;
use trussdash_api::config::ApiConfig;
use trussdash_core::catalog::StaticDocumentSource;
use trussdash_core::vendor::VendorConfig;

/// Nothing listens here; vendor calls fail fast with connection refused.
pub const UNREACHABLE_VENDOR: &str = "http://127.0.0.1:1/";

pub const DOCUMENT: &str = r##"{
  "openapi": "3.0.1",
  "paths": {
    "/api/public/projects": {
      "get": {
        "tags": ["Projects"],
        "operationId": "ListProjects",
        "responses": {
          "200": {
            "content": {
              "application/json": {
                "schema": { "type": "array", "items": { "$ref": "#/components/schemas/Project" } }
              }
            }
          }
        }
      }
    },
    "/api/ComponentDesigns/{guid}": {
      "get": {
        "tags": ["ComponentDesigns"],
        "parameters": [
          { "name": "guid", "in": "path", "required": true, "schema": { "type": "string", "format": "uuid" } }
        ],
        "responses": {
          "200": {
            "content": {
              "application/json": {
                "schema": { "$ref": "#/components/schemas/ComponentDesignResponse" }
              }
            }
          }
        }
      },
      "delete": { "tags": ["ComponentDesigns"] }
    },
    "/api/PlatePairs/getPlateTypeProperties/{plateType}": {
      "get": {
        "tags": ["PlatePairs"],
        "parameters": [
          { "name": "plateType", "in": "path", "required": true },
          { "name": "region", "in": "query", "required": true }
        ]
      }
    },
    "/api/LumberPrices/mostRecent/forAllStockLengths": {
      "post": { "tags": ["LumberPrices"] }
    }
  },
  "components": {
    "schemas": {
      "Project": {
        "type": "object",
        "required": ["id"],
        "properties": {
          "id": { "type": "string", "format": "uuid" },
          "name": { "type": ["string", "null"] }
        }
      },
      "ComponentDesignResponse": {
        "type": "object",
        "properties": { "componentDesign": { "$ref": "#/components/schemas/ComponentDesign" } }
      }
    }
  }
}"##;

pub fn config(vendor_base: &str) -> ApiConfig {
    ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        vendor: VendorConfig {
            base_url: vendor_base.into(),
            ..VendorConfig::default()
        },
        ..ApiConfig::default()
    }
}

/// Router over [`DOCUMENT`] and the given vendor base URL.
pub fn app(vendor_base: &str) -> Router {
    app_with_config(config(vendor_base))
}

pub fn app_with_config(config: ApiConfig) -> Router {
    let state = AppState::with_source(config, StaticDocumentSource::new(DOCUMENT))
        .expect("app state");
    trussdash_api::router(state)
}

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}/")
}

/// Send a request and decode the JSON response (`Null` for an empty body).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse JSON")
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}
