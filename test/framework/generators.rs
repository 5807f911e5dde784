//! Composable `proptest` strategies for token operation inputs.
//!
//! Generators produce semantic values (amounts, timelock offsets), not raw
//! bytes, so cases exercise real contract paths.  Edge-case weights are
//! tuned: ~20% of values are boundary cases to maximise bug-finding per
//! iteration.

extern crate std;

use proptest::prelude::*;

/// Largest amount generated; comfortably below the harness supply so burn
/// staging never fails for lack of owner balance.
pub const MAX_AMOUNT: i128 = 1_000_000_000_000;

/// Strictly positive token amounts, biased toward boundaries.
pub fn positive_amount_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        1 => Just(1i128),
        1 => Just(MAX_AMOUNT),
        8 => (1i128..=MAX_AMOUNT),
    ]
}

/// Amounts the contract must reject (zero or negative).
pub fn invalid_amount_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        2 => Just(0i128),
        1 => Just(-1i128),
        1 => Just(i128::MIN),
        6 => (i128::MIN..=0i128),
    ]
}

/// Offsets strictly inside the burn timelock window.
pub fn early_offset_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        1 => Just(0u64),
        1 => Just(token::burn::BURN_TIMELOCK - 1),
        8 => (0u64..token::burn::BURN_TIMELOCK),
    ]
}

/// Offsets at or past the unlock boundary.
pub fn late_offset_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        1 => Just(token::burn::BURN_TIMELOCK),
        9 => (token::burn::BURN_TIMELOCK..token::burn::BURN_TIMELOCK * 10),
    ]
}
