// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::Json;
use serde::Serialize;

use crate::consts::{DEFAULT_BLOCK_SLOT, EXAMPLE_CBOR};
use crate::context::params::default_protocol_parameters;
use crate::context::{Era, Network, RawFields};

#[derive(Debug, Serialize)]
pub struct ExampleResponse {
    pub raw: &'static str,
    /// Form fields that validate the example as submitted.
    pub fields: RawFields,
}

#[utoipa::path(
    get,
    path = "/v1/example",
    tag = "context",
    summary = "Example transaction",
    description = "A Babbage mainnet transaction together with form fields ready to submit to /v1/tx.",
    responses(
        (status = 200, description = "Example submission", body = Object)
    )
)]
pub async fn get_example() -> Json<ExampleResponse> {
    let mut fields = RawFields::with_parameters(
        &default_protocol_parameters(),
        Era::Babbage,
        Network::Mainnet,
        DEFAULT_BLOCK_SLOT,
    );
    fields.insert("raw", EXAMPLE_CBOR);
    Json(ExampleResponse {
        raw: EXAMPLE_CBOR,
        fields,
    })
}
