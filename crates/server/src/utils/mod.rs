// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod fraction;

pub use fraction::{Fraction, FractionError, to_fraction};
