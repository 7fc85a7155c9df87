// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the decoding/validation engine
    ///
    /// Env: LA_ENGINE_URL
    /// Valid schemes: http://, https://
    /// Default: http://127.0.0.1:3001
    pub url: String,

    /// Timeout applied to every engine call, in seconds. Calls are never
    /// retried; a timeout surfaces as an error to the client.
    ///
    /// Env: LA_ENGINE_TIMEOUT_SECS
    /// Default: 30
    pub timeout_secs: u64,
}

pub(crate) fn default_url() -> String {
    "http://127.0.0.1:3001".to_string()
}

pub(crate) fn default_timeout_secs() -> u64 {
    30
}

impl EngineConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidateError(
                "Engine URL cannot be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(&self.url).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid URL '{}': {}", self.url, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid URL scheme '{}'. Must be http:// or https://",
                    scheme
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidateError(
                "Engine timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_config() {
        let config = EngineConfig::default();
        assert_eq!(config.url, "http://127.0.0.1:3001");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_url() {
        let config = EngineConfig {
            url: "".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_scheme() {
        let config = EngineConfig {
            url: "ws://127.0.0.1:3001".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_https_url() {
        let config = EngineConfig {
            url: "https://engine.example.com/api".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config = EngineConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
