// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod address;
pub mod block;
pub mod common;
pub mod example;
pub mod health;
pub mod metrics;
pub mod params;
pub mod tx;
pub mod ui;
pub mod validations;
pub mod version;

pub use common::{ApiError, ApiFailure};
