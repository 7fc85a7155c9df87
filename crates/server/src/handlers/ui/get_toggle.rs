// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::extractors::JsonQuery;
use crate::visibility::{UiQuery, UiState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ToggleQuery {
    pub name: String,
    pub list: Option<String>,
    pub always_open: Option<bool>,
    pub beginning: Option<bool>,
    pub era: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub state: UiState,
    pub query: String,
}

#[utoipa::path(
    get,
    path = "/v1/ui/toggle",
    tag = "ui",
    summary = "Toggle a validation check",
    description = "Flips the visibility of one check and returns the new state with its query string.",
    params(
        ("name" = String, Query, description = "Check to toggle"),
        ("list" = Option<String>, Query, description = "Comma-separated names of the visible checks"),
        ("alwaysOpen" = Option<bool>, Query, description = "Keep the validations panel open"),
        ("beginning" = Option<bool>, Query, description = "Show validations before the tree"),
        ("era" = Option<String>, Query, description = "Era the visible checks were chosen for")
    ),
    responses(
        (status = 200, description = "Updated UI state", body = Object),
        (status = 400, description = "Invalid query")
    )
)]
pub async fn get_toggle(JsonQuery(query): JsonQuery<ToggleQuery>) -> Json<ToggleResponse> {
    let current = UiState::from_query(&UiQuery {
        list: query.list,
        always_open: query.always_open,
        beginning: query.beginning,
        era: query.era,
    });
    let state = current.toggle(&query.name);
    Json(ToggleResponse {
        query: state.to_query_string(),
        state,
    })
}
