// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Homeledger Contributors

//! Decimal money handling.
//!
//! Monetary values enter as decimal strings, are parsed into
//! [`rust_decimal::Decimal`], and are stored rounded to cents with a forced
//! scale of two so they serialize with exactly two fraction digits.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Parse a wire amount. `None` if the text is not a plain decimal.
pub fn parse(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

/// Round half-away-from-zero to cents and force a scale of two.
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    cents
}

/// `0.00`.
pub fn zero() -> Decimal {
    Decimal::new(0, 2)
}
