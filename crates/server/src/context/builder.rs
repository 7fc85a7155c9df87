// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ContextError, Era, Network};
use crate::types::{ProtocolParameter, ValidationContext};
use crate::utils::fraction::{Fraction, to_fraction};

/// Submitted form fields, keyed by field name (`Min_fee_a`, `Era`, `raw`...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFields(BTreeMap<String, String>);

impl RawFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields pre-filled with the given parameters and selection.
    pub fn with_parameters(
        parameters: &[ProtocolParameter],
        era: Era,
        network: Network,
        block_slot: i64,
    ) -> Self {
        let mut fields: RawFields = parameters
            .iter()
            .map(|p| (p.name.clone(), p.value.to_string()))
            .collect();
        fields.insert("Era", era.as_str());
        fields.insert("Network", network.as_str());
        fields.insert("Block_slot", block_slot.to_string());
        fields
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|v| v.trim())
    }

    /// The submitted artifact, if it is not blank.
    pub fn raw(&self) -> Option<&str> {
        self.get("raw").filter(|raw| !raw.is_empty())
    }

    pub fn era(&self) -> Result<Era, ContextError> {
        match self.get("Era").filter(|v| !v.is_empty()) {
            Some(value) => value.parse(),
            None => Ok(Era::default()),
        }
    }

    pub fn network(&self) -> Result<Network, ContextError> {
        match self.get("Network").filter(|v| !v.is_empty()) {
            Some(value) => value.parse(),
            None => Ok(Network::default()),
        }
    }

    /// Missing or unparseable slots read as 0, like every other integer field.
    pub fn block_slot(&self) -> i64 {
        self.integer("Block_slot")
    }

    fn integer(&self, name: &str) -> i64 {
        match self.get(name).map(|value| (value, parse_integer(value))) {
            Some((_, Some(value))) => value,
            Some((value, None)) => {
                tracing::debug!(field = name, value, "Unparseable integer parameter, using 0");
                0
            }
            None => {
                tracing::debug!(field = name, "Missing integer parameter, using 0");
                0
            }
        }
    }

    fn ratio(&self, name: &str) -> Fraction {
        let Some(value) = self.get(name) else {
            tracing::debug!(field = name, "Missing ratio parameter, using 0/1");
            return Fraction::ZERO;
        };

        match value.parse::<f64>().map(to_fraction) {
            Ok(Ok(fraction)) => fraction,
            Ok(Err(err)) => {
                tracing::debug!(field = name, value, error = %err, "Using 0/1");
                Fraction::ZERO
            }
            Err(_) => {
                tracing::debug!(field = name, value, "Unparseable ratio parameter, using 0/1");
                Fraction::ZERO
            }
        }
    }
}

impl FromIterator<(String, String)> for RawFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Integers are read as is; decimals are accepted and truncated toward zero.
fn parse_integer(value: &str) -> Option<i64> {
    if value.is_empty() {
        return None;
    }
    value.parse::<i64>().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.abs() < i64::MAX as f64)
            .map(|v| v.trunc() as i64)
    })
}

/// Build the engine context from the submitted form.
///
/// Missing or malformed numeric fields never fail the build: ratios fall
/// back to `0/1` and other parameters to `0`. Only the era can reject the
/// request, since Byron parameters are not usable for validation.
pub fn build(
    fields: &RawFields,
    era: Era,
    network: Network,
    block_slot: i64,
) -> Result<ValidationContext, ContextError> {
    if !era.accepts_validation_context() {
        return Err(ContextError::UnsupportedEra(era));
    }

    let a0 = fields.ratio("A0");
    let rho = fields.ratio("Rho");
    let tau = fields.ratio("Tau");
    let decentralisation = fields.ratio("Decentralisation_param");
    let extra_entropy = fields.ratio("Extra_entropy");
    let price_mem = fields.ratio("Price_mem");
    let price_step = fields.ratio("Price_step");

    Ok(ValidationContext {
        epoch: fields.integer("Epoch"),
        min_fee_a: fields.integer("Min_fee_a"),
        min_fee_b: fields.integer("Min_fee_b"),
        max_block_size: fields.integer("Max_block_size"),
        max_tx_size: fields.integer("Max_tx_size"),
        max_block_header_size: fields.integer("Max_block_header_size"),
        key_deposit: fields.integer("Key_deposit"),
        pool_deposit: fields.integer("Pool_deposit"),
        e_max: fields.integer("E_max"),
        n_opt: fields.integer("N_opt"),
        a0_numerator: a0.numerator,
        a0_denominator: a0.denominator,
        rho_numerator: rho.numerator,
        rho_denominator: rho.denominator,
        tau_numerator: tau.numerator,
        tau_denominator: tau.denominator,
        decentralisation_param_numerator: decentralisation.numerator,
        decentralisation_param_denominator: decentralisation.denominator,
        extra_entropy_numerator: extra_entropy.numerator,
        extra_entropy_denominator: extra_entropy.denominator,
        protocol_major_ver: fields.integer("Protocol_major_ver"),
        protocol_minor_ver: fields.integer("Protocol_minor_ver"),
        min_utxo: fields.integer("Min_utxo"),
        min_pool_cost: fields.integer("Min_pool_cost"),
        price_mem_numerator: price_mem.numerator,
        price_mem_denominator: price_mem.denominator,
        price_step_numerator: price_step.numerator,
        price_step_denominator: price_step.denominator,
        max_tx_ex_mem: fields.integer("Max_tx_ex_mem"),
        max_tx_ex_steps: fields.integer("Max_tx_ex_steps"),
        max_block_ex_mem: fields.integer("Max_block_ex_mem"),
        max_block_ex_steps: fields.integer("Max_block_ex_steps"),
        max_val_size: fields.integer("Max_val_size"),
        collateral_percent: fields.integer("Collateral_percent"),
        max_collateral_inputs: fields.integer("Max_collateral_inputs"),
        coins_per_utxo_size: fields.integer("Coins_per_utxo_size"),
        coins_per_utxo_word: fields.integer("Coins_per_utxo_word"),
        network: network.to_string(),
        era: era.to_string(),
        block_slot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_BLOCK_SLOT;
    use crate::context::params::default_protocol_parameters;

    fn default_fields() -> RawFields {
        RawFields::with_parameters(
            &default_protocol_parameters(),
            Era::Babbage,
            Network::Mainnet,
            DEFAULT_BLOCK_SLOT,
        )
    }

    fn fields(pairs: &[(&str, &str)]) -> RawFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_build_from_defaults() {
        let context = build(
            &default_fields(),
            Era::Babbage,
            Network::Mainnet,
            DEFAULT_BLOCK_SLOT,
        )
        .unwrap();

        assert_eq!(context.epoch, 478);
        assert_eq!(context.min_fee_a, 44);
        assert_eq!(context.min_fee_b, 155381);
        assert_eq!(context.max_tx_ex_steps, 10000000000);
        assert_eq!((context.a0_numerator, context.a0_denominator), (3, 10));
        assert_eq!((context.rho_numerator, context.rho_denominator), (3, 1000));
        assert_eq!((context.tau_numerator, context.tau_denominator), (1, 5));
        assert_eq!(
            (
                context.decentralisation_param_numerator,
                context.decentralisation_param_denominator
            ),
            (0, 1)
        );
        assert_eq!(
            (context.price_mem_numerator, context.price_mem_denominator),
            (577, 10000)
        );
        assert_eq!(
            (context.price_step_numerator, context.price_step_denominator),
            (721, 10000000)
        );
        assert_eq!(context.coins_per_utxo_word, 4310);
        assert_eq!(context.network, "Mainnet");
        assert_eq!(context.era, "Babbage");
        assert_eq!(context.block_slot, 72316896);
    }

    #[test]
    fn test_build_is_deterministic() {
        let fields = default_fields();
        let first = build(&fields, Era::Alonzo, Network::Preview, 10).unwrap();
        let second = build(&fields, Era::Alonzo, Network::Preview, 10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_byron_is_rejected() {
        assert_eq!(
            build(&default_fields(), Era::Byron, Network::Mainnet, 0),
            Err(ContextError::UnsupportedEra(Era::Byron))
        );
    }

    #[test]
    fn test_unparseable_values_use_defaults() {
        let fields = fields(&[
            ("Min_fee_a", "forty-four"),
            ("A0", "abc"),
            ("Rho", "NaN"),
            ("Tau", ""),
            ("Price_mem", "inf"),
        ]);
        let context = build(&fields, Era::Babbage, Network::Mainnet, 0).unwrap();

        assert_eq!(context.min_fee_a, 0);
        assert_eq!(context.min_fee_b, 0);
        assert_eq!((context.a0_numerator, context.a0_denominator), (0, 1));
        assert_eq!((context.rho_numerator, context.rho_denominator), (0, 1));
        assert_eq!((context.tau_numerator, context.tau_denominator), (0, 1));
        assert_eq!(
            (context.price_mem_numerator, context.price_mem_denominator),
            (0, 1)
        );
        assert_eq!(context.extra_entropy_denominator, 1);
    }

    #[test]
    fn test_decimal_integers_are_truncated() {
        let fields = fields(&[("Min_utxo", "4310.0"), ("E_max", "18.9"), ("N_opt", "-2.5")]);
        let context = build(&fields, Era::Conway, Network::Preprod, 0).unwrap();

        assert_eq!(context.min_utxo, 4310);
        assert_eq!(context.e_max, 18);
        assert_eq!(context.n_opt, -2);
        assert_eq!(context.network, "Preprod");
        assert_eq!(context.era, "Conway");
    }

    #[test]
    fn test_negative_ratio_keeps_sign() {
        let fields = fields(&[("Rho", "-0.25")]);
        let context = build(&fields, Era::Babbage, Network::Mainnet, 0).unwrap();
        assert_eq!((context.rho_numerator, context.rho_denominator), (-1, 4));
    }

    #[test]
    fn test_selection_defaults() {
        let empty = RawFields::new();
        assert_eq!(empty.era().unwrap(), Era::Babbage);
        assert_eq!(empty.network().unwrap(), Network::Mainnet);
        assert_eq!(empty.block_slot(), 0);
        assert_eq!(empty.raw(), None);

        let selected = fields(&[
            ("Era", "Alonzo"),
            ("Network", "Preview"),
            ("Block_slot", "123"),
            ("raw", "  84a4  "),
        ]);
        assert_eq!(selected.era().unwrap(), Era::Alonzo);
        assert_eq!(selected.network().unwrap(), Network::Preview);
        assert_eq!(selected.block_slot(), 123);
        assert_eq!(selected.raw(), Some("84a4"));

        let blank = fields(&[("raw", "   ")]);
        assert_eq!(blank.raw(), None);

        assert!(fields(&[("Era", "Goguen")]).era().is_err());
    }

    #[test]
    fn test_block_slot_falls_back_to_zero() {
        assert_eq!(fields(&[("Block_slot", "soon")]).block_slot(), 0);
        assert_eq!(fields(&[("Block_slot", "")]).block_slot(), 0);
        assert_eq!(fields(&[("Block_slot", "42")]).block_slot(), 42);
        assert_eq!(default_fields().block_slot(), DEFAULT_BLOCK_SLOT);
    }
}
