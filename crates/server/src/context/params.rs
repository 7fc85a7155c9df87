// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parameter vocabularies, their defaults, and conversion of engine-reported
//! parameters into form fields.

use crate::types::{LatestParameters, LegacyParameter, ProtocolParameter};

/// Parameters carried as `numerator / denominator` pairs in the context.
pub const RATIO_PARAMETERS: &[&str] = &[
    "A0",
    "Rho",
    "Tau",
    "Decentralisation_param",
    "Extra_entropy",
    "Price_mem",
    "Price_step",
];

/// Mainnet values at epoch 478.
const PROTOCOL_PARAMETER_DEFAULTS: &[(&str, f64)] = &[
    ("Epoch", 478.0),
    ("Min_fee_a", 44.0),
    ("Min_fee_b", 155381.0),
    ("Max_block_size", 90112.0),
    ("Max_tx_size", 16384.0),
    ("Max_block_header_size", 1100.0),
    ("Key_deposit", 2000000.0),
    ("Pool_deposit", 500000000.0),
    ("E_max", 18.0),
    ("N_opt", 500.0),
    ("A0", 0.3),
    ("Rho", 0.003),
    ("Tau", 0.2),
    ("Decentralisation_param", 0.0),
    ("Extra_entropy", 0.0),
    ("Protocol_major_ver", 8.0),
    ("Protocol_minor_ver", 0.0),
    ("Min_utxo", 4310.0),
    ("Min_pool_cost", 170000000.0),
    ("Price_mem", 0.0577),
    ("Price_step", 0.0000721),
    ("Max_tx_ex_mem", 14000000.0),
    ("Max_tx_ex_steps", 10000000000.0),
    ("Max_block_ex_mem", 62000000.0),
    ("Max_block_ex_steps", 20000000000.0),
    ("Max_val_size", 5000.0),
    ("Collateral_percent", 150.0),
    ("Max_collateral_inputs", 3.0),
    ("Coins_per_utxo_size", 4310.0),
    ("Coins_per_utxo_word", 4310.0),
];

const BYRON_PARAMETER_DEFAULTS: &[(&str, &str)] = &[
    ("Script_version", "0"),
    ("Slot_duration", "20000"),
    ("Max_block_size", "2000000"),
    ("Max_header_size", "2000000"),
    ("Max_tx_size", "4096"),
    ("Max_proposal_size", "700"),
    ("Mpc_thd", "20000000000000"),
    ("Heavy_del_thd", "300000000000"),
    ("Update_vote_thd", "1000000000000"),
    ("Update_proposal_thd", "100000000000000"),
    ("Update_implicit", "10000"),
    (
        "Soft_fork_rule",
        "(900000000000000, 600000000000000, 50000000000000)",
    ),
    ("Summand", "155381"),
    ("Multiplier", "44"),
    ("Unlock_stake_epoch", "18446744073709551615"),
];

pub const PROTOCOL_PARAMETER_NAMES: &[&str] = &[
    "Epoch",
    "Min_fee_a",
    "Min_fee_b",
    "Max_block_size",
    "Max_tx_size",
    "Max_block_header_size",
    "Key_deposit",
    "Pool_deposit",
    "E_max",
    "N_opt",
    "A0",
    "Rho",
    "Tau",
    "Decentralisation_param",
    "Extra_entropy",
    "Protocol_major_ver",
    "Protocol_minor_ver",
    "Min_utxo",
    "Min_pool_cost",
    "Price_mem",
    "Price_step",
    "Max_tx_ex_mem",
    "Max_tx_ex_steps",
    "Max_block_ex_mem",
    "Max_block_ex_steps",
    "Max_val_size",
    "Collateral_percent",
    "Max_collateral_inputs",
    "Coins_per_utxo_size",
    "Coins_per_utxo_word",
];

pub const BYRON_PARAMETER_NAMES: &[&str] = &[
    "Script_version",
    "Slot_duration",
    "Max_block_size",
    "Max_header_size",
    "Max_tx_size",
    "Max_proposal_size",
    "Mpc_thd",
    "Heavy_del_thd",
    "Update_vote_thd",
    "Update_proposal_thd",
    "Update_implicit",
    "Soft_fork_rule",
    "Summand",
    "Multiplier",
    "Unlock_stake_epoch",
];

pub fn is_ratio(name: &str) -> bool {
    RATIO_PARAMETERS.contains(&name)
}

pub fn default_protocol_parameters() -> Vec<ProtocolParameter> {
    PROTOCOL_PARAMETER_DEFAULTS
        .iter()
        .map(|(name, value)| ProtocolParameter::new(*name, *value))
        .collect()
}

pub fn byron_parameters() -> Vec<LegacyParameter> {
    BYRON_PARAMETER_DEFAULTS
        .iter()
        .map(|(name, value)| LegacyParameter {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect()
}

/// Form field name for a camelCase engine key.
///
/// `minFeeA` becomes `Min_fee_a`, `maxTransactionSize` becomes `Max_tx_size`
/// and `a0` becomes `A0`.
pub fn field_name(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for c in key.chars() {
        if c.is_ascii_uppercase() || words.is_empty() {
            words.push(String::new());
        }
        if let Some(word) = words.last_mut() {
            word.push(c.to_ascii_lowercase());
        }
    }

    let joined = words
        .into_iter()
        .map(|w| if w == "transaction" { "tx".to_string() } else { w })
        .collect::<Vec<_>>()
        .join("_");

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Turn engine-reported parameters into form parameters.
///
/// `...Numerator` keys are divided by their `...Denominator` (a missing, zero
/// or non-numeric denominator counts as 1) and the denominators themselves are
/// dropped. Non-numeric values are skipped. Engine order is kept.
pub fn params_from_latest(latest: &LatestParameters) -> Vec<ProtocolParameter> {
    latest
        .keys()
        .filter(|key| !key.ends_with("Denominator"))
        .filter_map(|key| {
            let value = latest.get_f64(key)?;
            match key.strip_suffix("Numerator") {
                Some(base) => {
                    let denominator = latest
                        .get_f64(&format!("{base}Denominator"))
                        .filter(|d| d.is_finite() && *d != 0.0)
                        .unwrap_or(1.0);
                    Some(ProtocolParameter::new(field_name(base), value / denominator))
                }
                None => Some(ProtocolParameter::new(field_name(key), value)),
            }
        })
        .collect()
}
