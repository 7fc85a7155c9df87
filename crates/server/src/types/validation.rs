// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Outcome of one ledger rule check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub name: String,
    pub value: bool,
    #[serde(default)]
    pub description: String,
}

impl Validation {
    pub fn new(name: impl Into<String>, value: bool, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            description: description.into(),
        }
    }
}

/// All checks the engine ran for a transaction, tagged with the era it
/// decoded the transaction as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validations {
    #[serde(default)]
    pub validations: Vec<Validation>,
    pub era: String,
}

impl Validations {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.validations.iter().map(|v| v.name.as_str())
    }

    pub fn failed(&self) -> usize {
        self.validations.iter().filter(|v| !v.value).count()
    }
}
