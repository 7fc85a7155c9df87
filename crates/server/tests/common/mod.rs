// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared helpers for the router tests: an in-memory decoding engine and
//! request shortcuts.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::app::create_app;
use server::context::{Era, Network};
use server::engine::{DecodeEngine, EngineError};
use server::state::AppState;
use server::types::{
    AddressOutput, DiagnosticNode, LatestParameters, SectionValidation, Validation,
    ValidationContext, Validations,
};
use tower::ServiceExt;

/// Engine answering with canned outputs. A missing output is reported as a
/// transport failure.
#[derive(Default)]
pub struct StubEngine {
    pub address: Option<AddressOutput>,
    pub tx: Option<SectionValidation>,
    pub block: Option<DiagnosticNode>,
    pub params: Option<LatestParameters>,
    /// Context received by the last `safe_parse_tx` call.
    pub last_context: Arc<Mutex<Option<ValidationContext>>>,
}

fn unavailable() -> EngineError {
    EngineError::Transport("connection refused".to_string())
}

#[async_trait]
impl DecodeEngine for StubEngine {
    async fn parse_address(&self, _raw: &str) -> Result<AddressOutput, EngineError> {
        self.address.clone().ok_or_else(unavailable)
    }

    async fn safe_parse_tx(
        &self,
        _raw: &str,
        context: &ValidationContext,
    ) -> Result<SectionValidation, EngineError> {
        *self.last_context.lock().unwrap() = Some(context.clone());
        self.tx.clone().ok_or_else(unavailable)
    }

    async fn safe_parse_block(&self, _raw: &str) -> Result<DiagnosticNode, EngineError> {
        self.block.clone().ok_or_else(unavailable)
    }

    async fn latest_parameters(&self, _network: Network) -> Result<LatestParameters, EngineError> {
        self.params.clone().ok_or_else(unavailable)
    }
}

pub fn app(engine: StubEngine) -> Router {
    app_with(engine, |_| {})
}

pub fn app_with(engine: StubEngine, configure: impl FnOnce(&mut AppState)) -> Router {
    let mut state = AppState::with_engine(Default::default(), Arc::new(engine));
    configure(&mut state);
    create_app(state)
}

/// A decoded Babbage transaction tree.
pub fn babbage_section() -> DiagnosticNode {
    DiagnosticNode::new()
        .with_topic("cbor_parse")
        .with_bytes(&[0x84, 0xa4])
        .push_child(
            DiagnosticNode::new()
                .with_topic("tx")
                .with_identity("Babbage")
                .with_attr("fee", 188337)
                .push_child(DiagnosticNode::new().with_topic("tx_hash").with_bytes(&[0xde, 0xad])),
        )
}

/// Engine output for a Babbage transaction where only the size check fails.
pub fn babbage_tx(era: &str) -> SectionValidation {
    let validations = [
        "Non empty inputs",
        "Minting policy",
        "Well formedness",
        "Auxiliary data",
        "Minimum lovelace",
        "Output value size",
        "Transaction execution units",
        "Transaction size",
        "Validity interval",
        "Network id",
    ]
    .into_iter()
    .map(|name| Validation::new(name, name != "Transaction size", format!("{name} check")))
    .collect();

    SectionValidation {
        section: babbage_section(),
        validations: Validations {
            validations,
            era: era.to_string(),
        },
    }
}

/// Engine output for an Alonzo transaction passing every Alonzo check.
pub fn alonzo_tx() -> SectionValidation {
    let validations = Era::Alonzo
        .default_validations()
        .unwrap()
        .iter()
        .map(|name| Validation::new(*name, true, format!("{name} check")))
        .collect();

    SectionValidation {
        section: babbage_section(),
        validations: Validations {
            validations,
            era: "Alonzo".to_string(),
        },
    }
}

pub fn latest_parameters() -> LatestParameters {
    let value = json!({
        "minFeeA": 44,
        "minFeeB": 155381,
        "maxTransactionSize": 16384,
        "a0Numerator": 3,
        "a0Denominator": 10,
        "priceMemNumerator": 577,
        "priceMemDenominator": 10000,
        "protocolVersion": "8.0",
    });
    serde_json::from_value(value).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(app: Router, uri: &str, form: &[(&str, &str)]) -> (StatusCode, Value) {
    let body = serde_urlencoded::to_string(form).unwrap();
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}
