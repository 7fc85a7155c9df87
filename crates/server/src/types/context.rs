// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Protocol-parameter context the engine validates a transaction against.
///
/// Every field is concrete: rational parameters are split into numerator and
/// denominator, and `network`/`era` carry the display names of the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationContext {
    pub epoch: i64,
    pub min_fee_a: i64,
    pub min_fee_b: i64,
    pub max_block_size: i64,
    pub max_tx_size: i64,
    pub max_block_header_size: i64,
    pub key_deposit: i64,
    pub pool_deposit: i64,
    pub e_max: i64,
    pub n_opt: i64,
    pub a0_numerator: i64,
    pub a0_denominator: i64,
    pub rho_numerator: i64,
    pub rho_denominator: i64,
    pub tau_numerator: i64,
    pub tau_denominator: i64,
    pub decentralisation_param_numerator: i64,
    pub decentralisation_param_denominator: i64,
    pub extra_entropy_numerator: i64,
    pub extra_entropy_denominator: i64,
    pub protocol_major_ver: i64,
    pub protocol_minor_ver: i64,
    pub min_utxo: i64,
    pub min_pool_cost: i64,
    pub price_mem_numerator: i64,
    pub price_mem_denominator: i64,
    pub price_step_numerator: i64,
    pub price_step_denominator: i64,
    pub max_tx_ex_mem: i64,
    pub max_tx_ex_steps: i64,
    pub max_block_ex_mem: i64,
    pub max_block_ex_steps: i64,
    pub max_val_size: i64,
    pub collateral_percent: i64,
    pub max_collateral_inputs: i64,
    pub coins_per_utxo_size: i64,
    pub coins_per_utxo_word: i64,
    pub network: String,
    pub era: String,
    pub block_slot: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let context = ValidationContext {
            e_max: 18,
            a0_numerator: 3,
            a0_denominator: 10,
            decentralisation_param_denominator: 1,
            block_slot: 72316896,
            era: "Babbage".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&context).unwrap();

        assert_eq!(json["eMax"], 18);
        assert_eq!(json["a0Numerator"], 3);
        assert_eq!(json["a0Denominator"], 10);
        assert_eq!(json["decentralisationParamDenominator"], 1);
        assert_eq!(json["blockSlot"], 72316896);
        assert_eq!(json["era"], "Babbage");
        assert_eq!(json.as_object().unwrap().len(), 40);
    }
}
