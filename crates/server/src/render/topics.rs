// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashMap;

use serde::Serialize;

/// Human-facing title and explanation of a diagnostic topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicMeta {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Lookup table from topic keys to their metadata.
#[derive(Debug, Clone, Default)]
pub struct TopicCatalog(HashMap<String, TopicMeta>);

const BUILTIN: &[(&str, &str, Option<&str>)] = &[
    (
        "cbor_parse",
        "Valid CBOR data",
        Some("The hex input was decoded as well-formed CBOR."),
    ),
    (
        "tx",
        "A valid Cardano Transaction",
        Some("The CBOR data was interpreted as a Cardano transaction."),
    ),
    (
        "era",
        "Era used for decoding",
        Some(
            "Transactions carry no era tag. Decoding is attempted era by era, starting with the most recent one.",
        ),
    ),
    ("tx_hash", "Transaction hash", None),
    (
        "fee",
        "Fee",
        Some("Lovelace paid to the protocol for processing this transaction."),
    ),
    (
        "start",
        "Validity start",
        Some("First slot at which the transaction may be included."),
    ),
    (
        "ttl",
        "Time to live",
        Some("Last slot at which the transaction may be included in a block."),
    ),
    (
        "tx_inputs",
        "Transaction Inputs",
        Some("Outputs of previous transactions consumed by this one, referenced by pointer."),
    ),
    (
        "tx_input_hash",
        "input tx hash",
        Some("Id of the transaction holding the consumed output."),
    ),
    (
        "tx_input_index",
        "output index",
        Some("Position of the consumed output within its transaction."),
    ),
    (
        "tx_collateral",
        "Collateral Inputs",
        Some("Inputs forfeited if a script of this transaction fails."),
    ),
    ("tx_total_collateral", "Total collateral", None),
    (
        "tx_outputs",
        "Transaction Outputs",
        Some("New UTxOs created by this transaction, each locked by an address."),
    ),
    ("output", "Transaction Output", None),
    (
        "tx_output_address",
        "Address",
        Some("Address controlling the assets of this output."),
    ),
    (
        "tx_output_lovelace",
        "Lovelace amount (1/1000000 ADA)",
        Some("Lovelace held by this output."),
    ),
    ("tx_output_datum", "Output Datum", None),
    ("tx_output_datum_hash", "Datum Hash", None),
    ("tx_output_assets", "Native Assets", None),
    ("tx_output_asset_policy", "Asset Policy", None),
    ("tx_output_asset_policy_id", "Policy id", None),
    ("tx_output_asset_policy_assets", "Policy Assets", None),
    ("tx_output_asset_policy_asset", "Asset", None),
    (
        "tx_reference_inputs",
        "Reference Inputs",
        Some("Outputs read by this transaction without being consumed."),
    ),
    (
        "tx_mints",
        "Transaction Mint",
        Some("Native tokens minted or burned by this transaction."),
    ),
    ("tx_mint_policy", "Minting Policy", None),
    ("tx_mint_policy_id", "Policy id", None),
    ("tx_mint_policy_assets", "Minted Assets", None),
    ("tx_mint_policy_asset", "Asset", None),
    ("tx_mint_policy_asset_name", "Asset name", None),
    ("tx_mint_policy_asset_name_ascii", "Asset name (ascii)", None),
    ("tx_mint_policy_asset_coint", "Quantity", None),
    (
        "tx_metadata",
        "Transaction Metadata",
        Some("Extra data attached to the transaction. It has no effect on ledger state."),
    ),
    ("tx_metadatum", "Metadatum", None),
    ("tx_metadata_label", "Label", None),
    ("tx_metadatum_value", "Value", None),
    (
        "tx_witnesses",
        "Transaction Witnesses",
        Some("Evidence required by the protocol to accept the transaction."),
    ),
    (
        "vkey_witness",
        "Verification Key Witness",
        Some("A signature of the transaction body by a private key."),
    ),
    ("vkey_witness_key", "Verification key", None),
    ("vkey_witness_key_hash", "Verification key hash", None),
    ("vkey_witness_signature", "Signature", None),
    (
        "tx_datum",
        "Transaction Datum",
        Some("Structured data attached to an output for script validation."),
    ),
    (
        "tx_datum_hash",
        "Datum Hash",
        Some("Hash identifying the datum. Outputs reference datums by this hash."),
    ),
    (
        "tx_datum_json",
        "Datum JSON",
        Some("A readable JSON view of the datum. Not its actual encoding."),
    ),
    ("tx_redeemer", "Redeemer", None),
    ("tx_redeemer_tag", "Redeemer tag", None),
    ("tx_redeemer_data_json", "Redeemer data", None),
    ("tx_redeemer_ex_units", "Execution units", None),
    (
        "block",
        "A valid Cardano Block",
        Some("The CBOR data was interpreted as a Cardano block."),
    ),
    ("block_header", "Block Header", None),
    ("block_body", "Block Body", None),
    ("block_tx", "Block Transaction", None),
    ("slot", "Slot", None),
    ("hash", "Hash", None),
];

impl TopicCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Topics emitted by the engine for transactions and blocks.
    pub fn builtin() -> Self {
        BUILTIN
            .iter()
            .fold(Self::new(), |catalog, (key, title, description)| {
                catalog.with(*key, *title, *description)
            })
    }

    pub fn with(mut self, key: &str, title: &str, description: Option<&str>) -> Self {
        self.0.insert(
            key.to_string(),
            TopicMeta {
                title: title.to_string(),
                description: description.map(str::to_string),
            },
        );
        self
    }

    /// Metadata for `key`. Unknown keys are their own title; a missing key
    /// has an empty one.
    pub fn lookup(&self, key: Option<&str>) -> TopicMeta {
        match key {
            Some(key) => self.0.get(key).cloned().unwrap_or_else(|| TopicMeta {
                title: key.to_string(),
                description: None,
            }),
            None => TopicMeta {
                title: String::new(),
                description: None,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
