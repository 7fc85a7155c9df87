// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::context::params::{byron_parameters, default_protocol_parameters, params_from_latest};
use crate::context::{Era, Network};
use crate::extractors::JsonQuery;
use crate::handlers::common::ApiError;
use crate::state::AppState;
use crate::types::{LegacyParameter, ProtocolParameter};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamsQuery {
    pub era: Option<String>,
}

/// Where the returned parameters came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamsSource {
    Engine,
    Defaults,
    Static,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ParameterSet {
    Protocol(Vec<ProtocolParameter>),
    Legacy(Vec<LegacyParameter>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamsResponse {
    pub network: Network,
    pub era: Era,
    pub source: ParamsSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub parameters: ParameterSet,
}

#[utoipa::path(
    get,
    path = "/v1/params/{network}",
    tag = "context",
    summary = "Protocol parameters",
    description = "Returns the parameters used to pre-fill the validation form. Non-Byron eras ask the engine for the latest parameters of the network and fall back to bundled mainnet defaults when it cannot answer.",
    params(
        ("network" = String, Path, description = "Mainnet, Preprod or Preview"),
        ("era" = Option<String>, Query, description = "Selected era (defaults to Babbage)")
    ),
    responses(
        (status = 200, description = "Parameter list", body = Object),
        (status = 400, description = "Unknown network or era")
    )
)]
pub async fn get_params(
    State(state): State<AppState>,
    Path(network): Path<String>,
    JsonQuery(query): JsonQuery<ParamsQuery>,
) -> Result<Json<ParamsResponse>, ApiError> {
    let network: Network = network.parse()?;
    let era = match query.era.as_deref().map(str::trim) {
        Some(era) if !era.is_empty() => era.parse()?,
        _ => Era::default(),
    };

    if era == Era::Byron {
        return Ok(Json(ParamsResponse {
            network,
            era,
            source: ParamsSource::Static,
            error: None,
            parameters: ParameterSet::Legacy(byron_parameters()),
        }));
    }

    let response = match state.engine.latest_parameters(network).await {
        Ok(latest) => ParamsResponse {
            network,
            era,
            source: ParamsSource::Engine,
            error: None,
            parameters: ParameterSet::Protocol(params_from_latest(&latest)),
        },
        Err(err) => {
            tracing::warn!(%network, error = %err, "Falling back to default protocol parameters");
            ParamsResponse {
                network,
                era,
                source: ParamsSource::Defaults,
                error: Some(err.to_string()),
                parameters: ParameterSet::Protocol(default_protocol_parameters()),
            }
        }
    };

    Ok(Json(response))
}
