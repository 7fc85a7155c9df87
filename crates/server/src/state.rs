// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use config::AppConfig;

use crate::engine::{DecodeEngine, HttpEngine};
use crate::render::TopicCatalog;
use crate::routes::RouteRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub engine: Arc<dyn DecodeEngine>,
    pub catalog: Arc<TopicCatalog>,
    pub route_registry: RouteRegistry,
}

impl AppState {
    /// State backed by the HTTP engine configured in `config`.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let engine = HttpEngine::from_config(&config.engine)?;
        Ok(Self::with_engine(config, Arc::new(engine)))
    }

    pub fn with_engine(config: AppConfig, engine: Arc<dyn DecodeEngine>) -> Self {
        Self {
            config,
            engine,
            catalog: Arc::new(TopicCatalog::builtin()),
            route_registry: RouteRegistry::new(),
        }
    }
}
