// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, extract::State};
use serde::Serialize;

use crate::context::RawFields;
use crate::extractors::JsonForm;
use crate::handlers::common::ApiError;
use crate::metrics::{record_decode, record_engine_failure};
use crate::state::AppState;
use crate::types::AddressDiagnostic;

#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub raw: String,
    pub bytes: Option<String>,
    pub address: Option<AddressDiagnostic>,
}

#[utoipa::path(
    post,
    path = "/v1/address",
    tag = "decode",
    summary = "Dissect an address",
    description = "Decodes a bech32, base58 or hex address into its header, payment and delegation parts.",
    request_body(content = Object, content_type = "application/x-www-form-urlencoded", description = "`raw` (or `address`): the address to decode"),
    responses(
        (status = 200, description = "Decoded address", body = Object),
        (status = 400, description = "Empty input or invalid address"),
        (status = 502, description = "Decoding engine unavailable")
    )
)]
pub async fn post_address(
    State(state): State<AppState>,
    JsonForm(fields): JsonForm<RawFields>,
) -> Result<Json<AddressResponse>, ApiError> {
    let raw = fields
        .raw()
        .or_else(|| fields.get("address").filter(|a| !a.is_empty()))
        .ok_or(ApiError::EmptyInput)?;

    record_decode("address");
    let output = state
        .engine
        .parse_address(raw)
        .await
        .inspect_err(|_| record_engine_failure("address"))?;

    if let Some(cause) = output.error {
        return Err(ApiError::AddressFailure {
            artifact: "address",
            cause,
        });
    }

    Ok(Json(AddressResponse {
        raw: raw.to_string(),
        bytes: output.bytes,
        address: output.address,
    }))
}
