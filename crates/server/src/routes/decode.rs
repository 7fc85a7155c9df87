// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::post};

use crate::{
    handlers::{address, block, tx},
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(registry, API_VERSION, "/tx", "post", post(tx::post_tx))
        .route_registered(registry, API_VERSION, "/block", "post", post(block::post_block))
        .route_registered(
            registry,
            API_VERSION,
            "/address",
            "post",
            post(address::post_address),
        )
}
