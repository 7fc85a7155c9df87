// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct ExpressConfig {
    /// Host/IP to bind the HTTP server to
    ///
    /// Env: LA_EXPRESS_BIND_HOST
    /// Default: 127.0.0.1
    pub bind_host: String,

    /// Port to bind the HTTP server to
    ///
    /// Env: LA_EXPRESS_PORT
    /// Default: 8080
    pub port: u16,

    /// Maximum accepted request body in bytes. CBOR payloads arrive hex-encoded
    /// in form bodies, so blocks need generous room.
    ///
    /// Env: LA_EXPRESS_REQUEST_LIMIT
    /// Default: 512000
    pub request_limit: usize,
}

pub(crate) fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_request_limit() -> usize {
    512_000
}

impl ExpressConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ValidateError(
                "Express port cannot be 0".to_string(),
            ));
        }

        if self.bind_host.parse::<IpAddr>().is_err() {
            return Err(ConfigError::ValidateError(format!(
                "Invalid bind host '{}': must be an IP address",
                self.bind_host
            )));
        }

        if self.request_limit == 0 {
            return Err(ConfigError::ValidateError(
                "Request limit cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ExpressConfig {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            port: default_port(),
            request_limit: default_request_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_express_config() {
        let config = ExpressConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_host, "127.0.0.1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_port_zero() {
        let config = ExpressConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_port_valid() {
        let config = ExpressConfig {
            port: 3000,
            ..Default::default()
        };
        assert!(config.validate().is_ok())
    }

    #[test]
    fn test_validate_bind_host() {
        let config = ExpressConfig {
            bind_host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = ExpressConfig {
            bind_host: "localhost:80".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
