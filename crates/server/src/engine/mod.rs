// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Boundary to the external decoding/validation engine.
//!
//! The service never interprets CBOR or evaluates ledger rules itself; it
//! hands the raw artifact (and, for transactions, the validation context) to
//! a [`DecodeEngine`] and works with the diagnostic tree it returns.

pub mod http;

pub use http::HttpEngine;

use async_trait::async_trait;
use thiserror::Error;

use crate::context::Network;
use crate::types::{AddressOutput, DiagnosticNode, LatestParameters, SectionValidation, ValidationContext};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Engine did not answer within {0} seconds")]
    Timeout(u64),

    #[error("Engine request failed: {0}")]
    Transport(String),

    #[error("Engine answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Engine response could not be decoded: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait DecodeEngine: Send + Sync {
    async fn parse_address(&self, raw: &str) -> Result<AddressOutput, EngineError>;

    /// Decode a transaction and run the ledger checks of its era against
    /// `context`.
    async fn safe_parse_tx(
        &self,
        raw: &str,
        context: &ValidationContext,
    ) -> Result<SectionValidation, EngineError>;

    async fn safe_parse_block(&self, raw: &str) -> Result<DiagnosticNode, EngineError>;

    async fn latest_parameters(&self, network: Network) -> Result<LatestParameters, EngineError>;
}
