// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::get};

use crate::{
    handlers::{example, params, validations},
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/params/{network}",
            "get",
            get(params::get_params),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/validations/{era}",
            "get",
            get(validations::get_validations),
        )
        .route_registered(registry, API_VERSION, "/example", "get", get(example::get_example))
}
