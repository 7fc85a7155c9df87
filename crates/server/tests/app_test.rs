// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{StubEngine, app, app_with, get, send};

#[tokio::test]
async fn test_root_lists_registered_routes() {
    let (status, json) = get(app(StubEngine::default()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "lovelace-anatomy");

    let paths: Vec<&str> = json["routes"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["path"].as_str())
        .collect();
    for path in ["/v1/health", "/v1/tx", "/v1/params/{network}", "/v1/ui/toggle"] {
        assert!(paths.contains(&path), "missing {path}");
    }
}

#[tokio::test]
async fn test_health_and_version() {
    let (status, json) = get(app(StubEngine::default()), "/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    let (status, _) = get(app(StubEngine::default()), "/v1/version").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, json) = get(app(StubEngine::default()), "/v1/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/v1/tx"]["post"].is_object());
    assert!(json["paths"]["/v1/params/{network}"]["get"].is_object());
}

#[tokio::test]
async fn test_metrics_route_absent_when_disabled() {
    let (status, _) = get(app(StubEngine::default()), "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = app_with(StubEngine::default(), |state| {
        state.config.express.request_limit = 16
    });
    let body = format!("raw={}", "ab".repeat(18));
    let (status, _) = send(
        app,
        Request::builder()
            .method("POST")
            .uri("/v1/block")
            .header("content-type", "application/x-www-form-urlencoded")
            .header("content-length", body.len())
            .body(Body::from(body))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_toggle_round_trip() {
    let (status, json) = get(app(StubEngine::default()), "/v1/ui/toggle?name=Fees&list=TTL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["visible"], serde_json::json!(["TTL", "Fees"]));
    assert_eq!(json["query"], "list=TTL%2CFees&alwaysOpen=false&beginning=true");

    let (status, json) = get(
        app(StubEngine::default()),
        "/v1/ui/toggle?name=TTL&list=TTL,Fees&beginning=false",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["visible"], serde_json::json!(["Fees"]));
    assert_eq!(json["state"]["beginning"], false);
}

#[tokio::test]
async fn test_toggle_rejects_bad_query() {
    let (status, _) = get(app(StubEngine::default()), "/v1/ui/toggle?list=TTL").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = get(app(StubEngine::default()), "/v1/ui/toggle?name=TTL&open=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("open"));
}
