// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ledger eras and everything that varies with them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ContextError;
use super::params::{BYRON_PARAMETER_NAMES, PROTOCOL_PARAMETER_NAMES};

const BYRON_VALIDATIONS: &[&str] = &[
    "Non empty inputs",
    "Transaction size",
    "Non empty outputs",
    "Outputs have lovelace",
];

const SHELLEY_MA_VALIDATIONS: &[&str] = &[
    "Transaction size",
    "Non empty inputs",
    "Metadata",
    "Minting",
    "Minimum lovelace",
    "Fees",
    "TTL",
    "Network id",
];

const ALONZO_VALIDATIONS: &[&str] = &[
    "Non empty inputs",
    "Network ID",
    "Minting",
    "Auxiliary data",
    "Minimum lovelace",
    "Transaction size",
    "Script data hash",
    "Transaction validity interval",
    "Outputs value size",
    "Execution units",
    "Languages",
];

const BABBAGE_VALIDATIONS: &[&str] = &[
    "Non empty inputs",
    "Minting policy",
    "Well formedness",
    "Auxiliary data",
    "Minimum lovelace",
    "Output value size",
    "Transaction execution units",
    "Transaction size",
    "Validity interval",
    "Network id",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    Byron,
    #[serde(rename = "Shelley MA")]
    ShelleyMa,
    Alonzo,
    #[default]
    Babbage,
    Conway,
}

impl Era {
    pub const ALL: [Era; 5] = [
        Era::Byron,
        Era::ShelleyMa,
        Era::Alonzo,
        Era::Babbage,
        Era::Conway,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Era::Byron => "Byron",
            Era::ShelleyMa => "Shelley MA",
            Era::Alonzo => "Alonzo",
            Era::Babbage => "Babbage",
            Era::Conway => "Conway",
        }
    }

    /// Names of the checks shown by default for this era.
    ///
    /// `None` when the era has no fixed list; callers then show whatever
    /// the engine reported.
    pub fn default_validations(&self) -> Option<&'static [&'static str]> {
        match self {
            Era::Byron => Some(BYRON_VALIDATIONS),
            Era::ShelleyMa => Some(SHELLEY_MA_VALIDATIONS),
            Era::Alonzo => Some(ALONZO_VALIDATIONS),
            Era::Babbage => Some(BABBAGE_VALIDATIONS),
            Era::Conway => None,
        }
    }

    /// Parameter names accepted by the context form for this era.
    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            Era::Byron => BYRON_PARAMETER_NAMES,
            Era::ShelleyMa | Era::Alonzo | Era::Babbage | Era::Conway => PROTOCOL_PARAMETER_NAMES,
        }
    }

    /// Byron parameters are informational only; the engine cannot validate
    /// against them.
    pub fn accepts_validation_context(&self) -> bool {
        !matches!(self, Era::Byron)
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Era {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "byron" => Ok(Era::Byron),
            // the engine labels this era with its full name
            "shelleyma" | "shelleymaryallegra" => Ok(Era::ShelleyMa),
            "alonzo" => Ok(Era::Alonzo),
            "babbage" => Ok(Era::Babbage),
            "conway" => Ok(Era::Conway),
            _ => Err(ContextError::UnknownEra(s.to_string())),
        }
    }
}
