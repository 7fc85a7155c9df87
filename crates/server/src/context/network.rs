// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ContextError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    #[default]
    Mainnet,
    Preprod,
    Preview,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Preprod, Network::Preview];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Preprod => "Preprod",
            Network::Preview => "Preview",
        }
    }

    /// Handshake magic of the network.
    pub fn magic(&self) -> u32 {
        match self {
            Network::Mainnet => 764824073,
            Network::Preprod => 1,
            Network::Preview => 2,
        }
    }

    /// Network id carried in address headers: 1 for mainnet, 0 for testnets.
    pub fn network_id(&self) -> u8 {
        match self {
            Network::Mainnet => 1,
            Network::Preprod | Network::Preview => 0,
        }
    }

    /// Lowercase name used in engine URLs.
    pub fn slug(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Preprod => "preprod",
            Network::Preview => "preview",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "preprod" => Ok(Network::Preprod),
            "preview" => Ok(Network::Preview),
            _ => Err(ContextError::UnknownNetwork(s.to_string())),
        }
    }
}
