// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use config::{AppConfig, Args};
use server::{app, logging, metrics, state::AppState};

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = AppConfig::from_env_file(&args.env_file)?;

    // Must outlive the server or buffered file lines are lost
    let _log_guard = logging::init(&config.log)?;

    if config.metrics.enabled {
        metrics::init(&config.metrics.prometheus_prefix)?;
        tracing::info!(prefix = %config.metrics.prometheus_prefix, "Metrics enabled on /metrics");
    }

    let addr = format!("{}:{}", config.express.bind_host, config.express.port);
    tracing::info!("Log level: {}", config.log.level);
    tracing::info!(
        url = %config.engine.url,
        timeout_secs = config.engine.timeout_secs,
        "Decoding engine"
    );

    let state = AppState::new(config)?;
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting server on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
