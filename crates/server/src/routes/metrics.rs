// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{handlers::metrics, state::AppState};
use axum::{Router, routing::get};

/// Unversioned scrape endpoint, only mounted when metrics are enabled.
pub fn routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics::get_metrics))
}
