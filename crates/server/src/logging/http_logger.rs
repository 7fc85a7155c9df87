// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Instant;

#[derive(Debug, PartialEq, Eq)]
enum Severity {
    Debug,
    Warn,
    Error,
}

fn severity(status: StatusCode) -> Severity {
    if status.is_server_error() {
        Severity::Error
    } else if status.is_client_error() {
        Severity::Warn
    } else {
        Severity::Debug
    }
}

macro_rules! request_event {
    ($level:ident, $method:expr, $path:expr, $status:expr, $ms:expr) => {
        tracing::$level!(
            target: "http",
            method = %$method,
            path = %$path,
            status = $status,
            duration_ms = $ms,
            "{} {} {} {}ms",
            $method,
            $path,
            $status,
            $ms
        )
    };
}

/// One event per request on target `http`: debug for 2xx/3xx, warn for 4xx
/// and error for 5xx.
///
/// Example line: `POST /v1/tx?list=Fees 200 45ms`
pub async fn http_logger_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = match req.uri().query() {
        Some(query) => format!("{}?{}", req.uri().path(), query),
        None => req.uri().path().to_string(),
    };
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status();
    let code = status.as_u16();

    match severity(status) {
        Severity::Debug => request_event!(debug, method, path, code, duration_ms),
        Severity::Warn => request_event!(warn, method, path, code, duration_ms),
        Severity::Error => request_event!(error, method, path, code, duration_ms),
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_by_status_class() {
        assert_eq!(severity(StatusCode::OK), Severity::Debug);
        assert_eq!(severity(StatusCode::FOUND), Severity::Debug);
        assert_eq!(severity(StatusCode::BAD_REQUEST), Severity::Warn);
        assert_eq!(severity(StatusCode::UNPROCESSABLE_ENTITY), Severity::Warn);
        assert_eq!(severity(StatusCode::BAD_GATEWAY), Severity::Error);
    }
}
