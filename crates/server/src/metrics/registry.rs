// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Metrics not initialized")]
    NotInitialized,

    #[error("Prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("Metrics output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

lazy_static! {
    pub static ref REGISTRY: Mutex<Option<Registry>> = Mutex::new(None);

    // Created without registering to the default registry
    pub static ref HTTP_REQUESTS: Counter = Counter::new(
        "http_requests",
        "Total number of HTTP requests"
    )
    .expect("Failed to create http_requests counter");

    pub static ref HTTP_REQUEST_SUCCESS: Counter = Counter::new(
        "http_request_success",
        "Number of successful HTTP requests"
    )
    .expect("Failed to create http_request_success counter");

    pub static ref HTTP_REQUEST_ERROR: Counter = Counter::new(
        "http_request_error",
        "Number of HTTP request errors"
    )
    .expect("Failed to create http_request_error counter");

    pub static ref REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "request_duration_seconds",
            "Duration of HTTP requests in seconds"
        ).buckets(vec![0.1, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create request_duration_seconds histogram");

    pub static ref RESPONSE_SIZE_BYTES: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "response_size_bytes",
            "Size of HTTP responses in bytes"
        ).buckets(vec![100.0, 500.0, 1000.0, 5000.0, 10000.0, 50000.0, 100000.0, 500000.0, 1000000.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create response_size_bytes histogram");

    pub static ref DECODE_REQUESTS: CounterVec = CounterVec::new(
        Opts::new("decode_requests", "Artifacts forwarded to the engine"),
        &["artifact"]
    )
    .expect("Failed to create decode_requests counter");

    pub static ref ENGINE_FAILURES: CounterVec = CounterVec::new(
        Opts::new("engine_failures", "Engine calls that failed or timed out"),
        &["artifact"]
    )
    .expect("Failed to create engine_failures counter");
}

/// Register every metric with a custom registry using `prefix`.
///
/// Calling it again after a successful initialization is a no-op.
pub fn init(prefix: &str) -> Result<(), MetricsError> {
    let mut guard = REGISTRY.lock().unwrap_or_else(|e| e.into_inner());
    if guard.is_some() {
        return Ok(());
    }

    let registry = Registry::new_custom(Some(prefix.to_string()), None)?;
    registry.register(Box::new(HTTP_REQUESTS.clone()))?;
    registry.register(Box::new(HTTP_REQUEST_SUCCESS.clone()))?;
    registry.register(Box::new(HTTP_REQUEST_ERROR.clone()))?;
    registry.register(Box::new(REQUEST_DURATION_SECONDS.clone()))?;
    registry.register(Box::new(RESPONSE_SIZE_BYTES.clone()))?;
    registry.register(Box::new(DECODE_REQUESTS.clone()))?;
    registry.register(Box::new(ENGINE_FAILURES.clone()))?;

    *guard = Some(registry);
    Ok(())
}

/// Gather all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, MetricsError> {
    let encoder = TextEncoder::new();
    let guard = REGISTRY.lock().unwrap_or_else(|e| e.into_inner());
    let registry = guard.as_ref().ok_or(MetricsError::NotInitialized)?;
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

pub fn record_decode(artifact: &str) {
    DECODE_REQUESTS.with_label_values(&[artifact]).inc();
}

pub fn record_engine_failure(artifact: &str) {
    ENGINE_FAILURES.with_label_values(&[artifact]).inc();
}
