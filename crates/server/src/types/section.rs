// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The diagnostic tree returned by the engine for transactions and blocks.

use serde::{Deserialize, Serialize};

use super::Validations;

/// A leaf fact of a node: a catalog topic and its printed value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One node of a decoded artifact.
///
/// A node with `error` set is a decoding failure and is terminal: renderers
/// ignore its `attributes` and `children` even when the payload carries them.
/// Children keep decode order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<String>,
    #[serde(default)]
    pub children: Vec<DiagnosticNode>,
}

impl DiagnosticNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_attr(mut self, topic: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push(Attribute {
            topic: Some(topic.into()),
            value: Some(value.to_string()),
        });
        self
    }

    pub fn with_maybe_attr(mut self, topic: impl Into<String>, value: Option<impl ToString>) -> Self {
        self.attributes.push(Attribute {
            topic: Some(topic.into()),
            value: value.map(|v| v.to_string()),
        });
        self
    }

    /// Attach raw bytes, hex-encoded.
    pub fn with_bytes(mut self, bytes: &[u8]) -> Self {
        self.bytes = Some(hex::encode(bytes));
        self
    }

    pub fn push_child(mut self, child: DiagnosticNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn collect_children(mut self, children: impl IntoIterator<Item = DiagnosticNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// A node that carries bytes but nothing else to show.
    pub fn is_bytes_leaf(&self) -> bool {
        self.bytes.is_some() && self.attributes.is_empty() && self.children.is_empty()
    }
}

/// Engine output for a transaction: the tree plus the era's checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionValidation {
    pub section: DiagnosticNode,
    pub validations: Validations,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_missing_collections() {
        let node: DiagnosticNode =
            serde_json::from_value(json!({ "topic": "cbor_parse", "error": "bad hex" })).unwrap();
        assert_eq!(node.topic.as_deref(), Some("cbor_parse"));
        assert!(node.is_error());
        assert!(node.attributes.is_empty());
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_deserialize_nested_tree() {
        let node: DiagnosticNode = serde_json::from_value(json!({
            "topic": "tx",
            "attributes": [{ "topic": "fee", "value": "188337" }, { "topic": "ttl" }],
            "children": [
                { "topic": "tx_inputs", "identity": "0", "children": [] },
                { "topic": "tx_outputs", "identity": "1", "bytes": "a0" }
            ]
        }))
        .unwrap();

        assert_eq!(node.attributes.len(), 2);
        assert_eq!(node.attributes[1].value, None);
        assert_eq!(node.children[0].identity.as_deref(), Some("0"));
        assert!(node.children[1].is_bytes_leaf());
    }

    #[test]
    fn test_builder_preserves_order() {
        let node = DiagnosticNode::new()
            .with_topic("tx")
            .with_attr("fee", 188337)
            .with_maybe_attr("ttl", None::<u64>)
            .with_bytes(&[0xde, 0xad])
            .collect_children([
                DiagnosticNode::new().with_topic("tx_inputs"),
                DiagnosticNode::new().with_topic("tx_outputs"),
            ]);

        assert_eq!(node.bytes.as_deref(), Some("dead"));
        assert_eq!(node.attributes[0].value.as_deref(), Some("188337"));
        assert_eq!(node.attributes[1].value, None);
        let topics: Vec<_> = node.children.iter().map(|c| c.topic.as_deref()).collect();
        assert_eq!(topics, vec![Some("tx_inputs"), Some("tx_outputs")]);
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let node = DiagnosticNode::new().with_topic("block");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({ "topic": "block", "attributes": [], "children": [] })
        );
    }
}
