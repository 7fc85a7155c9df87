// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use config::LogConfig;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt,
    layer::{Layered, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

type FilteredRegistry = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync>;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Filter directives for a configured level. The `http` pseudo-level keeps
/// everything at info and turns on request logging.
pub fn filter_directives(level: &str) -> &str {
    if level == "http" { "info,http=debug" } else { level }
}

fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(filter_directives(level)).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

fn console_layer(config: &LogConfig) -> BoxedLayer {
    if config.json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi)
            .boxed()
    }
}

/// Size-rotated file output: `logs.log` plus up to `write_max_files - 1`
/// rotated files (`logs.log.1`, `logs.log.2`, ...).
fn file_layer(config: &LogConfig) -> Result<(BoxedLayer, WorkerGuard), LoggingError> {
    std::fs::create_dir_all(&config.write_path)?;

    let appender = BasicRollingFileAppender::new(
        PathBuf::from(&config.write_path).join("logs.log"),
        RollingConditionBasic::new().max_size(config.write_max_file_size),
        config.write_max_files.saturating_sub(1),
    )?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = if config.json {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            // never write escape codes to files
            .with_ansi(false)
            .with_writer(writer)
            .boxed()
    };
    Ok((layer, guard))
}

/// Install the global subscriber.
///
/// When file output is enabled the returned guard flushes pending lines on
/// drop and must live as long as the process logs.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = build_filter(&config.level)?;
    let mut layers = vec![console_layer(config)];

    let guard = if config.write {
        let (layer, guard) = file_layer(config)?;
        layers.push(layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_level_maps_to_target_filter() {
        assert_eq!(filter_directives("http"), "info,http=debug");
        assert_eq!(filter_directives("warn"), "warn");
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        assert!(matches!(
            build_filter("server=bogus"),
            Err(LoggingError::InvalidLogLevel { .. })
        ));
        assert!(build_filter("debug").is_ok());
    }
}
