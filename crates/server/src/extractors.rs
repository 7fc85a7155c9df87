// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Custom Axum extractors that return JSON error responses.

use axum::Json;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, FromRequest, FromRequestParts, Query, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

/// A wrapper around [`Query<T>`] that returns JSON error responses on rejection.
///
/// Axum's default `Query<T>` answers with plain text when deserialization
/// fails (e.g. unknown fields with `deny_unknown_fields`). This extractor
/// answers `{"code": 400, "error": "..."}` instead.
pub struct JsonQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for JsonQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| JsonQuery(value))
            .map_err(query_error)
    }
}

/// Same as [`JsonQuery`] for url-encoded request bodies.
pub struct JsonForm<T>(pub T);

impl<T, S> FromRequest<S> for JsonForm<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Form::<T>::from_request(req, state)
            .await
            .map(|Form(value)| JsonForm(value))
            .map_err(form_error)
    }
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "code": 400, "error": message })),
    )
        .into_response()
}

fn query_error(rejection: QueryRejection) -> Response {
    bad_request(rejection.body_text())
}

fn form_error(rejection: FormRejection) -> Response {
    bad_request(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::routing::{get, post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    struct TestParams {
        #[serde(default)]
        pub always_open: bool,
        pub list: Option<String>,
    }

    async fn query_handler(JsonQuery(params): JsonQuery<TestParams>) -> String {
        format!(
            "{}:{}",
            params.always_open,
            params.list.as_deref().unwrap_or("")
        )
    }

    async fn form_handler(JsonForm(fields): JsonForm<BTreeMap<String, String>>) -> String {
        fields.len().to_string()
    }

    async fn send(app: Router, request: axum::http::Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    async fn get_uri(uri: &str) -> (StatusCode, String) {
        let app = Router::new().route("/test", get(query_handler));
        send(
            app,
            axum::http::Request::builder()
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn valid_params_return_200() {
        let (status, body) = get_uri("/test?alwaysOpen=true&list=Fees").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "true:Fees");
    }

    #[tokio::test]
    async fn empty_query_returns_200() {
        let (status, body) = get_uri("/test").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "false:");
    }

    #[tokio::test]
    async fn unknown_field_returns_json_400() {
        let (status, body) = get_uri("/test?badParam=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let parsed: serde_json::Value =
            serde_json::from_str(&body).expect("Response should be valid JSON");
        assert_eq!(parsed["code"], 400);
        let error_msg = parsed["error"].as_str().unwrap();
        assert!(
            error_msg.contains("unknown field") || error_msg.contains("badParam"),
            "Error message should mention the unknown field, got: {error_msg}"
        );
    }

    #[tokio::test]
    async fn form_body_is_extracted() {
        let app = Router::new().route("/form", post(form_handler));
        let (status, body) = send(
            app,
            axum::http::Request::builder()
                .method("POST")
                .uri("/form")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("raw=84a4&Era=Babbage"))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "2");
    }

    #[tokio::test]
    async fn form_without_content_type_is_json_error() {
        let app = Router::new().route("/form", post(form_handler));
        let (status, body) = send(
            app,
            axum::http::Request::builder()
                .method("POST")
                .uri("/form")
                .body(Body::from("raw=84a4"))
                .unwrap(),
        )
        .await;
        assert!(status.is_client_error());
        let parsed: serde_json::Value =
            serde_json::from_str(&body).expect("Response must be valid JSON, not plain text");
        assert!(parsed.get("error").is_some());
    }
}
