// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lovelace Anatomy",
        version = "0.1.0",
        description = "Dissects Cardano addresses, transactions and blocks into diagnostic trees and runs era-aware ledger checks against user-supplied protocol parameters.",
        license(name = "GPL-3.0-or-later")
    ),
    servers(
        (url = "http://localhost:8080", description = "Localhost")
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "version", description = "Service version"),
        (name = "decode", description = "Address, transaction and block dissection"),
        (name = "context", description = "Protocol parameters, era vocabularies and the example submission"),
        (name = "ui", description = "Visibility state of the validation checks"),
    ),
    paths(
        crate::handlers::health::get_health::get_health,
        crate::handlers::version::get_version::get_version,
        // Decode
        crate::handlers::tx::post_tx::post_tx,
        crate::handlers::block::post_block::post_block,
        crate::handlers::address::post_address::post_address,
        // Context
        crate::handlers::params::get_params::get_params,
        crate::handlers::validations::get_validations::get_validations,
        crate::handlers::example::get_example::get_example,
        // UI
        crate::handlers::ui::get_toggle::get_toggle,
    ),
)]
pub struct ApiDoc;

/// Handler for GET /v1/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
