// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, extract::State};
use serde::Serialize;

use crate::context::{self, RawFields};
use crate::extractors::{JsonForm, JsonQuery};
use crate::handlers::common::ApiError;
use crate::metrics::{record_decode, record_engine_failure};
use crate::render::{Panel, render, root_error};
use crate::state::AppState;
use crate::types::{DiagnosticNode, Validation, ValidationContext};
use crate::visibility::{UiQuery, UiState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TxResponse {
    pub raw: String,
    /// Era the engine decoded the transaction as.
    pub era: String,
    pub section: DiagnosticNode,
    pub panels: Vec<Panel>,
    pub validations: Vec<Validation>,
    /// Checks left visible by the UI state, in engine order.
    pub shown: Vec<Validation>,
    pub ui: UiState,
    pub query: String,
    pub context: ValidationContext,
}

#[utoipa::path(
    post,
    path = "/v1/tx",
    tag = "decode",
    summary = "Dissect a transaction",
    description = "Decodes a hex-encoded transaction, validates it against the submitted protocol parameters and renders the diagnostic tree. The UI state travels in the query string and is returned reconciled with the decoded era.",
    params(
        ("list" = Option<String>, Query, description = "Comma-separated names of the visible checks"),
        ("alwaysOpen" = Option<bool>, Query, description = "Keep the validations panel open"),
        ("beginning" = Option<bool>, Query, description = "Show validations before the tree"),
        ("era" = Option<String>, Query, description = "Era the visible checks were chosen for")
    ),
    request_body(content = Object, content_type = "application/x-www-form-urlencoded", description = "`raw`, `Era`, `Network`, `Block_slot` and the protocol parameters"),
    responses(
        (status = 200, description = "Decoded and validated transaction", body = Object),
        (status = 400, description = "Empty input, invalid selection or undecodable transaction"),
        (status = 422, description = "Era cannot be used for validation"),
        (status = 502, description = "Decoding engine unavailable")
    )
)]
pub async fn post_tx(
    State(state): State<AppState>,
    JsonQuery(query): JsonQuery<UiQuery>,
    JsonForm(fields): JsonForm<RawFields>,
) -> Result<Json<TxResponse>, ApiError> {
    dissect_tx(&state, &query, &fields).await.map(Json)
}

/// Decode, validate and render one transaction.
///
/// A query without `list` is taken as a first submission: the visible set is
/// seeded with every check of the selected era before reconciling. This is
/// local to transaction dissection. [`UiState::from_query`] itself reads a
/// missing `list` as nothing visible.
pub async fn dissect_tx(
    state: &AppState,
    query: &UiQuery,
    fields: &RawFields,
) -> Result<TxResponse, ApiError> {
    let raw = fields.raw().ok_or(ApiError::EmptyInput)?;
    let era = fields.era()?;
    let network = fields.network()?;
    let context = context::build(fields, era, network, fields.block_slot())?;

    record_decode("tx");
    let result = state
        .engine
        .safe_parse_tx(raw, &context)
        .await
        .inspect_err(|_| record_engine_failure("tx"))?;

    let panels = render(&result.section, &state.catalog);
    if let Some(panel) = root_error(&panels) {
        return Err(ApiError::DecodeFailure {
            artifact: "transaction",
            panel: panel.clone(),
        });
    }

    let mut ui = UiState::from_query(query);
    if query.list.is_none() {
        ui = UiState {
            era: Some(era),
            ..ui.on_era_changed(era, &result.validations.validations)
        };
    }
    let ui = ui.reconcile(era, &result.validations);

    tracing::debug!(
        selected = %era,
        decoded = %result.validations.era,
        failed = result.validations.failed(),
        "Transaction validated"
    );

    Ok(TxResponse {
        raw: raw.to_string(),
        era: result.validations.era.clone(),
        shown: ui.filter_for_display(&result.validations.validations),
        query: ui.to_query_string(),
        ui,
        panels,
        section: result.section,
        validations: result.validations.validations,
        context,
    })
}
