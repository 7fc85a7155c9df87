// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{StubEngine, app_with, babbage_tx, post_form};
use http_body_util::BodyExt;
use server::metrics;
use tower::ServiceExt;

#[test]
fn test_metrics_initialization() {
    metrics::init("test").unwrap();

    let metrics_text = metrics::gather_metrics().unwrap();
    assert!(!metrics_text.is_empty());

    // Counters always appear even with zero values
    assert!(
        metrics_text.contains("test_http_requests"),
        "Should contain test_http_requests"
    );
    assert!(
        metrics_text.contains("test_http_request_success"),
        "Should contain test_http_request_success"
    );
    assert!(
        metrics_text.contains("test_http_request_error"),
        "Should contain test_http_request_error"
    );
}

#[test]
fn test_http_metrics_increment() {
    use server::metrics::registry::{HTTP_REQUEST_ERROR, HTTP_REQUEST_SUCCESS, HTTP_REQUESTS};

    metrics::init("test").unwrap();

    let initial_total = HTTP_REQUESTS.get();
    let initial_success = HTTP_REQUEST_SUCCESS.get();
    let initial_error = HTTP_REQUEST_ERROR.get();

    HTTP_REQUESTS.inc();
    HTTP_REQUEST_SUCCESS.inc();
    HTTP_REQUEST_ERROR.inc();

    assert!(HTTP_REQUESTS.get() >= initial_total + 1.0);
    assert!(HTTP_REQUEST_SUCCESS.get() >= initial_success + 1.0);
    assert!(HTTP_REQUEST_ERROR.get() >= initial_error + 1.0);
}

#[test]
fn test_histogram_metrics() {
    use server::metrics::registry::REQUEST_DURATION_SECONDS;

    metrics::init("test").unwrap();

    REQUEST_DURATION_SECONDS
        .with_label_values(&["GET", "/test", "200"])
        .observe(0.5);

    let metrics_text = metrics::gather_metrics().unwrap();
    assert!(metrics_text.contains("test_request_duration_seconds"));
    assert!(metrics_text.contains("bucket"));
}

#[tokio::test]
async fn test_decode_requests_are_scraped() {
    metrics::init("test").unwrap();

    let engine = StubEngine {
        tx: Some(babbage_tx("Babbage")),
        ..Default::default()
    };
    let app = app_with(engine, |state| state.config.metrics.enabled = true);

    let (status, _) = post_form(app.clone(), "/v1/tx", &[("raw", "84a4"), ("Era", "Babbage")]).await;
    assert_eq!(status, StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("test_decode_requests{artifact=\"tx\"}"));
    assert!(text.contains("route=\"/v1/tx\""));
}
