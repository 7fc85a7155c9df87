// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod engine;
mod error;
mod express;
mod log;
mod metrics;

pub use args::Args;
pub use engine::EngineConfig;
pub use error::ConfigError;
pub use express::ExpressConfig;
pub use log::LogConfig;
pub use metrics::{MetricsConfig, MetricsError};

use serde::Deserialize;

/// Prefix shared by every environment variable the service reads.
pub const ENV_PREFIX: &str = "LA_";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
    pub engine: EngineConfig,
    pub metrics: MetricsConfig,
}

/// Flat view of the environment as `envy` sees it.
///
/// `envy` cannot populate nested structs, so every variable is read here and
/// then distributed into the per-section configs.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "express::default_bind_host")]
    express_bind_host: String,
    #[serde(default = "express::default_port")]
    express_port: u16,
    #[serde(default = "express::default_request_limit")]
    express_request_limit: usize,

    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,

    #[serde(default = "engine::default_url")]
    engine_url: String,
    #[serde(default = "engine::default_timeout_secs")]
    engine_timeout_secs: u64,

    #[serde(default)]
    metrics_enabled: bool,
    #[serde(default = "metrics::default_prefix")]
    metrics_prometheus_prefix: String,
}

impl From<EnvConfig> for AppConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            express: ExpressConfig {
                bind_host: env.express_bind_host,
                port: env.express_port,
                request_limit: env.express_request_limit,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
                write: env.log_write,
                write_path: env.log_write_path,
                write_max_file_size: env.log_write_max_file_size,
                write_max_files: env.log_write_max_files,
            },
            engine: EngineConfig {
                url: env.engine_url,
                timeout_secs: env.engine_timeout_secs,
            },
            metrics: MetricsConfig {
                enabled: env.metrics_enabled,
                prometheus_prefix: env.metrics_prometheus_prefix,
            },
        }
    }
}

impl AppConfig {
    /// Load the configuration from `LA_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Load variables from `path` (if it exists) into the process environment,
    /// then read the configuration from it. Variables already set win.
    pub fn from_env_file(path: &str) -> Result<Self, ConfigError> {
        if dotenv::from_filename(path).is_err() {
            eprintln!("No env file found at '{}', using process environment", path);
        }
        Self::from_env()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.engine.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LA_EXPRESS_PORT",
        "LA_LOG_LEVEL",
        "LA_ENGINE_URL",
        "LA_ENGINE_TIMEOUT_SECS",
        "LA_METRICS_ENABLED",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: tests touching the environment are serialized.
            unsafe { std::env::remove_var(var) };
        }
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.express.port, 8080);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.engine.url, "http://127.0.0.1:3001");
        assert!(!config.metrics.enabled);
    }

    #[test]
    #[serial]
    fn test_from_env_uses_defaults() {
        clear_env();
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.express.port, 8080);
        assert_eq!(config.express.bind_host, "127.0.0.1");
        assert_eq!(config.engine.timeout_secs, 30);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_prefixed_vars() {
        clear_env();
        unsafe {
            std::env::set_var("LA_EXPRESS_PORT", "3000");
            std::env::set_var("LA_LOG_LEVEL", "debug");
            std::env::set_var("LA_ENGINE_URL", "https://engine.example.com");
            std::env::set_var("LA_METRICS_ENABLED", "true");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.express.port, 3000);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.engine.url, "https://engine.example.com");
        assert!(config.metrics.enabled);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_values() {
        clear_env();
        unsafe { std::env::set_var("LA_ENGINE_TIMEOUT_SECS", "0") };
        assert!(AppConfig::from_env().is_err());

        clear_env();
        unsafe { std::env::set_var("LA_EXPRESS_PORT", "not-a-port") };
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::EnvError(_))
        ));

        clear_env();
    }
}
