// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/v1/health",
    tag = "health",
    summary = "Health check",
    description = "Liveness probe. Does not contact the decoding engine.",
    responses(
        (status = 200, description = "Service is alive", body = Object)
    )
)]
pub async fn get_health() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
    };

    (StatusCode::OK, Json(response))
}
