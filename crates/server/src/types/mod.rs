// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shapes exchanged with the decoding/validation engine.
//!
//! Everything here serializes in camelCase, matching the engine's wire format.

pub mod address;
pub mod context;
pub mod params;
pub mod section;
pub mod validation;

pub use address::{AddressDiagnostic, AddressOutput, ShelleyPart};
pub use context::ValidationContext;
pub use params::{LatestParameters, LegacyParameter, ProtocolParameter};
pub use section::{Attribute, DiagnosticNode, SectionValidation};
pub use validation::{Validation, Validations};
