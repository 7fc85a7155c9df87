// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decimal to integer-ratio conversion for rational protocol parameters.
//!
//! The engine evaluates ledger rules with exact rational arithmetic, so values
//! such as the monetary expansion rate or the execution unit prices have to be
//! sent as `numerator / denominator` pairs. The form carries them as decimals;
//! [`to_fraction`] recovers the ratio with a bounded continued fraction
//! expansion.

use serde::Serialize;
use thiserror::Error;

/// Relative error at which the expansion stops.
///
/// Tight enough to recover every decimal with up to 12 significant digits
/// exactly (`0.0000721` becomes `721 / 10000000`).
pub const TOLERANCE: f64 = 1e-12;

/// Upper bound on the number of continued fraction terms.
pub const MAX_ITERATIONS: usize = 64;

#[derive(Debug, Error, PartialEq)]
pub enum FractionError {
    #[error("Cannot convert {0} to a fraction: value must be finite and fit in 64 bits")]
    InvalidParameter(f64),
}

/// An integer ratio. The denominator is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    /// Value used when a ratio field is missing or unparseable.
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Convert a decimal into an integer ratio approximating it.
///
/// Integral inputs map to `(value, 1)` exactly. Other inputs are expanded as a
/// continued fraction until the convergent is within [`TOLERANCE`] (relative),
/// the remainder vanishes, [`MAX_ITERATIONS`] terms were taken, or the next
/// convergent would overflow `i64`. The sign lives on the numerator.
pub fn to_fraction(value: f64) -> Result<Fraction, FractionError> {
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return Err(FractionError::InvalidParameter(value));
    }

    if value.fract() == 0.0 {
        return Ok(Fraction {
            numerator: value as i64,
            denominator: 1,
        });
    }

    let target = value.abs();
    let whole = target.floor();

    // Convergents h/k, seeded with h(-1)/k(-1) = 1/0 and h(0)/k(0) = a0/1
    let (mut h_prev, mut h) = (1i64, whole as i64);
    let (mut k_prev, mut k) = (0i64, 1i64);
    let mut remainder = target - whole;

    for _ in 0..MAX_ITERATIONS {
        if remainder == 0.0 || (target - h as f64 / k as f64).abs() <= TOLERANCE * target {
            break;
        }

        let inverse = 1.0 / remainder;
        let term = inverse.floor();
        remainder = inverse - term;

        if term >= i64::MAX as f64 {
            break;
        }
        let term = term as i64;

        let next = term
            .checked_mul(h)
            .and_then(|v| v.checked_add(h_prev))
            .zip(term.checked_mul(k).and_then(|v| v.checked_add(k_prev)));
        let Some((h_next, k_next)) = next else {
            break;
        };

        h_prev = h;
        h = h_next;
        k_prev = k;
        k = k_next;
    }

    let numerator = if value.is_sign_negative() { -h } else { h };
    Ok(Fraction {
        numerator,
        denominator: k,
    })
}
