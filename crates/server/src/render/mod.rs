// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Flattening of a [`DiagnosticNode`] tree into display panels.
//!
//! The walk is depth-first and pre-order. For every node the panels come out
//! as: header, hex bytes, attributes, children, and finally an empty marker
//! when the node has nothing else to show. A node carrying an error yields a
//! single error panel and its subtree is skipped.

pub mod topics;

pub use topics::{TopicCatalog, TopicMeta};

use serde::Serialize;

use crate::types::DiagnosticNode;

pub const EMPTY_VALUE: &str = "(empty)";
pub const ROOT_HEX_LABEL: &str = "bytes (hex)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PanelKind {
    #[serde(rename_all = "camelCase")]
    Section {
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        collapsible: bool,
        expanded: bool,
    },
    Error {
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        error: String,
    },
    Hex {
        label: String,
        value: String,
    },
    Attribute {
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        value: String,
    },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub depth: usize,
    #[serde(flatten)]
    pub kind: PanelKind,
}

impl Panel {
    fn new(depth: usize, kind: PanelKind) -> Self {
        Self { depth, kind }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, PanelKind::Error { .. })
    }
}

/// Render `root` into panels, resolving titles through `catalog`.
pub fn render(root: &DiagnosticNode, catalog: &TopicCatalog) -> Vec<Panel> {
    let mut panels = Vec::new();
    let mut stack: Vec<(&DiagnosticNode, usize)> = vec![(root, 0)];

    while let Some((node, depth)) = stack.pop() {
        let topic = catalog.lookup(node.topic.as_deref());
        let is_root = depth == 0;

        if let Some(error) = &node.error {
            panels.push(Panel::new(
                depth,
                PanelKind::Error {
                    title: topic.title,
                    description: topic.description,
                    error: error.clone(),
                },
            ));
            continue;
        }

        let hex_label = if is_root {
            ROOT_HEX_LABEL.to_string()
        } else {
            format!("{} CBOR (hex)", topic.title)
        };

        panels.push(Panel::new(
            depth,
            PanelKind::Section {
                title: topic.title,
                description: topic.description,
                collapsible: !is_root,
                expanded: true,
            },
        ));

        if let Some(bytes) = &node.bytes {
            panels.push(Panel::new(
                depth,
                PanelKind::Hex {
                    label: hex_label,
                    value: bytes.clone(),
                },
            ));
        }

        for attribute in &node.attributes {
            let meta = catalog.lookup(attribute.topic.as_deref());
            let value = attribute
                .value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(EMPTY_VALUE);
            panels.push(Panel::new(
                depth,
                PanelKind::Attribute {
                    title: meta.title,
                    description: meta.description,
                    value: value.to_string(),
                },
            ));
        }

        if node.attributes.is_empty() && node.children.is_empty() {
            if !node.is_bytes_leaf() {
                panels.push(Panel::new(depth, PanelKind::Empty));
            }
            continue;
        }

        // reversed so the first child is popped first
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }

    panels
}

/// First error panel of a rendering, if the root failed to decode.
pub fn root_error(panels: &[Panel]) -> Option<&Panel> {
    panels.first().filter(|p| p.depth == 0 && p.is_error())
}
