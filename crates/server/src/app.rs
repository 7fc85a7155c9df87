// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, extract::DefaultBodyLimit, middleware, routing::get};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

use crate::{
    logging::http_logger_middleware,
    metrics::metrics_middleware,
    openapi,
    routes::{self, API_VERSION},
    state::AppState,
};

/// Versioned API, registered in the state's route registry.
fn v1_routes(state: &AppState) -> Router<AppState> {
    let registry = &state.route_registry;
    Router::new()
        .merge(routes::health::routes(registry))
        .merge(routes::version::routes(registry))
        .merge(routes::decode::routes(registry))
        .merge(routes::context::routes(registry))
        .merge(routes::ui::routes(registry))
        .route("/openapi.json", get(openapi::openapi_json))
}

pub fn create_app(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(routes::root::root_handler))
        .nest(API_VERSION, v1_routes(&state));

    if state.config.metrics.enabled {
        app = app
            .merge(routes::metrics::routes())
            .layer(middleware::from_fn(metrics_middleware));
    }

    app.layer(middleware::from_fn(http_logger_middleware))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.config.express.request_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

