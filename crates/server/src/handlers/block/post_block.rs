// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, extract::State};
use serde::Serialize;

use crate::context::RawFields;
use crate::extractors::JsonForm;
use crate::handlers::common::ApiError;
use crate::metrics::{record_decode, record_engine_failure};
use crate::render::{Panel, render, root_error};
use crate::state::AppState;
use crate::types::DiagnosticNode;

#[derive(Debug, Serialize)]
pub struct BlockResponse {
    pub raw: String,
    pub section: DiagnosticNode,
    pub panels: Vec<Panel>,
}

#[utoipa::path(
    post,
    path = "/v1/block",
    tag = "decode",
    summary = "Dissect a block",
    description = "Decodes a hex-encoded block and renders its diagnostic tree.",
    request_body(content = Object, content_type = "application/x-www-form-urlencoded", description = "`raw`: the block CBOR in hex"),
    responses(
        (status = 200, description = "Decoded block", body = Object),
        (status = 400, description = "Empty input or undecodable block"),
        (status = 502, description = "Decoding engine unavailable")
    )
)]
pub async fn post_block(
    State(state): State<AppState>,
    JsonForm(fields): JsonForm<RawFields>,
) -> Result<Json<BlockResponse>, ApiError> {
    let raw = fields.raw().ok_or(ApiError::EmptyInput)?;

    record_decode("block");
    let section = state
        .engine
        .safe_parse_block(raw)
        .await
        .inspect_err(|_| record_engine_failure("block"))?;

    let panels = render(&section, &state.catalog);
    if let Some(panel) = root_error(&panels) {
        return Err(ApiError::DecodeFailure {
            artifact: "block",
            panel: panel.clone(),
        });
    }

    Ok(Json(BlockResponse {
        raw: raw.to_string(),
        section,
        panels,
    }))
}
