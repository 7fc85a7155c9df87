// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod consts;
pub mod context;
pub mod engine;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod openapi;
pub mod render;
pub mod routes;
pub mod state;
pub mod types;
pub mod utils;
pub mod visibility;
