// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Which validation checks are shown, and how that choice survives in the
//! query string.
//!
//! Every reducer takes `&self` and returns a new [`UiState`].

use serde::{Deserialize, Serialize};

use crate::context::Era;
use crate::types::{Validation, Validations};

/// Query parameters carrying the persisted UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UiQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beginning: Option<bool>,
    /// Era the list was chosen for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub always_open: bool,
    pub beginning: bool,
    /// Visible check names, in display order and without duplicates.
    pub visible: Vec<String>,
    /// Era of the last decoded transaction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<Era>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            always_open: false,
            beginning: true,
            visible: Vec::new(),
            era: None,
        }
    }
}

impl UiState {
    pub fn from_query(query: &UiQuery) -> Self {
        let names = query
            .list
            .as_deref()
            .map(|list| list.split(',').collect::<Vec<_>>())
            .unwrap_or_default();

        let era = query.era.as_deref().and_then(|label| match label.parse::<Era>() {
            Ok(era) => Some(era),
            Err(_) => {
                tracing::debug!(era = label, "Ignoring unknown era in query");
                None
            }
        });

        Self {
            always_open: query.always_open.unwrap_or(false),
            beginning: query.beginning.unwrap_or(true),
            visible: Vec::new(),
            era,
        }
        .with_visible(names)
    }

    pub fn to_query(&self) -> UiQuery {
        UiQuery {
            list: Some(self.visible.join(",")),
            always_open: Some(self.always_open),
            beginning: Some(self.beginning),
            era: self.era.map(|era| era.as_str().to_string()),
        }
    }

    pub fn to_query_string(&self) -> String {
        // a struct of strings and bools always serializes
        serde_urlencoded::to_string(self.to_query()).unwrap_or_default()
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.visible.iter().any(|v| v == name)
    }

    /// Replace the visible set, dropping blanks and repeated names.
    pub fn with_visible<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut visible: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() && !visible.iter().any(|v| v == name) {
                visible.push(name.to_string());
            }
        }
        Self {
            visible,
            ..self.clone()
        }
    }

    /// Show every check of `era`, or every reported check when the era has
    /// no fixed list.
    pub fn on_era_changed(&self, era: Era, results: &[Validation]) -> Self {
        match era.default_validations() {
            Some(names) => self.with_visible(names.iter()),
            None => self.with_visible(results.iter().map(|v| v.name.as_str())),
        }
    }

    pub fn toggle(&self, name: &str) -> Self {
        let name = name.trim();
        if self.is_visible(name) {
            Self {
                visible: self.visible.iter().filter(|v| *v != name).cloned().collect(),
                ..self.clone()
            }
        } else {
            self.with_visible(self.visible.iter().map(String::as_str).chain([name]))
        }
    }

    pub fn filter_for_display(&self, results: &[Validation]) -> Vec<Validation> {
        results
            .iter()
            .filter(|v| self.is_visible(&v.name))
            .cloned()
            .collect()
    }

    /// Align the state with the era the engine actually decoded.
    ///
    /// The decoded era is compared with the era the visible set was chosen
    /// for, or with `selected` when no era was carried over. On a change the
    /// visible set is reset for the decoded era. An era label this service
    /// does not know resets to the reported checks.
    pub fn reconcile(&self, selected: Era, decoded: &Validations) -> Self {
        match decoded.era.parse::<Era>() {
            Ok(era) => {
                let next = if era == self.era.unwrap_or(selected) {
                    self.clone()
                } else {
                    self.on_era_changed(era, &decoded.validations)
                };
                Self {
                    era: Some(era),
                    ..next
                }
            }
            Err(_) => {
                tracing::debug!(era = %decoded.era, "Engine reported an unknown era");
                self.with_visible(decoded.names())
            }
        }
    }
}
