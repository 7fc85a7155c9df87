// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error type shared by the decoding endpoints.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

use crate::consts::EMPTY_INPUT_MESSAGE;
use crate::context::{ContextError, Era};
use crate::engine::EngineError;
use crate::render::{Panel, PanelKind};

/// Body of every failed request.
#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub code: u16,
    pub error: String,
    pub cause: String,
    /// Rendered error panel of a failed decode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<Panel>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,

    #[error("Unable to decode {artifact}")]
    DecodeFailure { artifact: &'static str, panel: Panel },

    #[error("Unable to decode {artifact}")]
    AddressFailure { artifact: &'static str, cause: String },

    #[error("Unsupported era")]
    UnsupportedEra(Era),

    #[error("Invalid selection")]
    InvalidSelection(#[source] ContextError),

    #[error("Decoding engine unavailable")]
    EngineUnavailable(#[from] EngineError),
}

impl From<ContextError> for ApiError {
    fn from(err: ContextError) -> Self {
        match err {
            ContextError::UnsupportedEra(era) => ApiError::UnsupportedEra(era),
            other => ApiError::InvalidSelection(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::EmptyInput
            | ApiError::DecodeFailure { .. }
            | ApiError::AddressFailure { .. }
            | ApiError::InvalidSelection(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedEra(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::EngineUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error = self.to_string();

        let (cause, panel) = match self {
            ApiError::EmptyInput => (EMPTY_INPUT_MESSAGE.to_string(), None),
            ApiError::DecodeFailure { panel, .. } => {
                let cause = match &panel.kind {
                    PanelKind::Error { error, .. } => error.clone(),
                    _ => String::new(),
                };
                (cause, Some(panel))
            }
            ApiError::AddressFailure { cause, .. } => (cause, None),
            ApiError::UnsupportedEra(era) => (
                format!("Era '{era}' parameters cannot be used to validate transactions"),
                None,
            ),
            ApiError::InvalidSelection(err) => (err.to_string(), None),
            ApiError::EngineUnavailable(err) => {
                tracing::warn!(error = %err, "Engine call failed");
                (err.to_string(), None)
            }
        };

        let body = Json(ApiFailure {
            code: status.as_u16(),
            error,
            cause,
            panel,
        });
        (status, body).into_response()
    }
}
