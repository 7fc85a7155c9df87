// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    body::Body,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Instant;

use super::registry::{
    HTTP_REQUEST_ERROR, HTTP_REQUEST_SUCCESS, HTTP_REQUESTS, REQUEST_DURATION_SECONDS,
    RESPONSE_SIZE_BYTES,
};

lazy_static! {
    static ref ROUTE_PATTERNS: Vec<(Regex, &'static str)> = [
        (r"^/v1/params/[^/]+$", "/v1/params/{network}"),
        (r"^/v1/validations/[^/]+$", "/v1/validations/{era}"),
    ]
    .into_iter()
    .filter_map(|(pattern, route)| Regex::new(pattern).ok().map(|re| (re, route)))
    .collect();
}

/// Collapse path parameters so unmatched requests do not explode label
/// cardinality. Example: `/v1/params/preview` -> `/v1/params/{network}`.
fn normalize_route(path: &str) -> String {
    ROUTE_PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(path))
        .map(|(_, route)| route.to_string())
        .unwrap_or_else(|| path.to_string())
}

/// Metrics middleware for tracking HTTP requests
pub async fn metrics_middleware(
    matched_path: Option<MatchedPath>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    if path == "/metrics" {
        return next.run(req).await;
    }

    HTTP_REQUESTS.inc();
    let start = Instant::now();

    let method = req.method().to_string();
    let route = matched_path
        .as_ref()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| normalize_route(&path));

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status();
    let status_code = status.as_u16().to_string();

    if status.is_client_error() || status.is_server_error() {
        HTTP_REQUEST_ERROR.inc();
    } else if status.is_success() {
        HTTP_REQUEST_SUCCESS.inc();
    }

    REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &route, &status_code])
        .observe(duration);

    // Collect the response body to measure its size
    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .map(|collected| collected.to_bytes())
        .unwrap_or_default();

    if !bytes.is_empty() {
        RESPONSE_SIZE_BYTES
            .with_label_values(&[&method, &route, &status_code])
            .observe(bytes.len() as f64);
    }

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_route() {
        assert_eq!(normalize_route("/v1/params/preview"), "/v1/params/{network}");
        assert_eq!(normalize_route("/v1/validations/Babbage"), "/v1/validations/{era}");
        assert_eq!(normalize_route("/v1/tx"), "/v1/tx");
        assert_eq!(normalize_route("/v1/params/preview/extra"), "/v1/params/preview/extra");
    }
}
