// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{DecodeEngine, EngineError};
use crate::context::Network;
use crate::types::{AddressOutput, DiagnosticNode, LatestParameters, SectionValidation, ValidationContext};

#[derive(Serialize)]
struct DecodeRequest<'a> {
    raw: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a ValidationContext>,
}

/// [`DecodeEngine`] reached over HTTP.
///
/// Endpoints: `POST /address`, `POST /tx`, `POST /block` with a
/// `{ raw, context? }` JSON body, and `GET /params/{network}`.
#[derive(Clone)]
pub struct HttpEngine {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpEngine {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, EngineError> {
        url::Url::parse(base_url)
            .map_err(|e| EngineError::Transport(format!("invalid engine URL '{base_url}': {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout,
        })
    }

    pub fn from_config(config: &config::EngineConfig) -> Result<Self, EngineError> {
        Self::new(&config.url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_error(&self, err: reqwest::Error) -> EngineError {
        if err.is_timeout() {
            EngineError::Timeout(self.timeout.as_secs())
        } else if err.is_decode() {
            EngineError::InvalidResponse(err.to_string())
        } else {
            EngineError::Transport(err.to_string())
        }
    }

    async fn read<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T, EngineError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response.json::<T>().await.map_err(|e| self.map_error(e))
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: &DecodeRequest<'_>) -> Result<T, EngineError> {
        let url = self.url(path);
        tracing::debug!(%url, "Calling engine");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;
        self.read(response).await
    }
}

#[async_trait]
impl DecodeEngine for HttpEngine {
    async fn parse_address(&self, raw: &str) -> Result<AddressOutput, EngineError> {
        self.post("/address", &DecodeRequest { raw, context: None }).await
    }

    async fn safe_parse_tx(
        &self,
        raw: &str,
        context: &ValidationContext,
    ) -> Result<SectionValidation, EngineError> {
        self.post(
            "/tx",
            &DecodeRequest {
                raw,
                context: Some(context),
            },
        )
        .await
    }

    async fn safe_parse_block(&self, raw: &str) -> Result<DiagnosticNode, EngineError> {
        self.post("/block", &DecodeRequest { raw, context: None }).await
    }

    async fn latest_parameters(&self, network: Network) -> Result<LatestParameters, EngineError> {
        let url = self.url(&format!("/params/{}", network.slug()));
        tracing::debug!(%url, "Fetching latest parameters");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;
        self.read(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let engine = HttpEngine::new("http://127.0.0.1:3001/", Duration::from_secs(1)).unwrap();
        assert_eq!(engine.base_url(), "http://127.0.0.1:3001");
        assert_eq!(engine.url("/tx"), "http://127.0.0.1:3001/tx");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(HttpEngine::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_request_body_omits_missing_context() {
        let body = serde_json::to_value(DecodeRequest {
            raw: "84a4",
            context: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "raw": "84a4" }));
    }

    #[tokio::test]
    async fn test_unreachable_engine_is_a_transport_error() {
        // port 9 (discard) is not expected to accept connections
        let engine = HttpEngine::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let result = engine.safe_parse_block("00").await;
        assert!(matches!(
            result,
            Err(EngineError::Transport(_)) | Err(EngineError::Timeout(_))
        ));
    }
}
