// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Translation of the parameter form into the engine's validation context.

pub mod builder;
pub mod era;
pub mod network;
pub mod params;

pub use builder::{RawFields, build};
pub use era::Era;
pub use network::Network;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ContextError {
    #[error("Era '{0}' cannot be used to validate transactions")]
    UnsupportedEra(Era),

    #[error("Unknown era '{0}'")]
    UnknownEra(String),

    #[error("Unknown network '{0}'")]
    UnknownNetwork(String),
}
