// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, extract::Path};
use serde::Serialize;

use crate::context::Era;
use crate::context::params::is_ratio;
use crate::handlers::common::ApiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationsResponse {
    pub era: Era,
    /// Checks shown by default. `None` means every check the engine reports.
    pub validations: Option<&'static [&'static str]>,
    pub parameters: &'static [&'static str],
    pub ratio_parameters: Vec<&'static str>,
    pub accepts_validation_context: bool,
}

impl From<Era> for ValidationsResponse {
    fn from(era: Era) -> Self {
        let parameters = era.vocabulary();
        Self {
            era,
            validations: era.default_validations(),
            parameters,
            ratio_parameters: parameters.iter().copied().filter(|p| is_ratio(p)).collect(),
            accepts_validation_context: era.accepts_validation_context(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/validations/{era}",
    tag = "context",
    summary = "Era vocabulary",
    description = "Lists the default validation checks and the parameter names of an era.",
    params(
        ("era" = String, Path, description = "Byron, Shelley MA, Alonzo, Babbage or Conway")
    ),
    responses(
        (status = 200, description = "Era vocabulary", body = Object),
        (status = 400, description = "Unknown era")
    )
)]
pub async fn get_validations(Path(era): Path<String>) -> Result<Json<ValidationsResponse>, ApiError> {
    let era: Era = era.parse()?;
    Ok(Json(era.into()))
}
