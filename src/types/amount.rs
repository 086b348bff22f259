//! Monetary amount type and normalization helpers
//!
//! All money in the ledger is represented as `rust_decimal::Decimal` to avoid
//! floating-point rounding artifacts. Every amount crossing an operation
//! boundary (user input, arithmetic result) is normalized to exactly two
//! fractional digits before use.
//!
//! All functions are pure (no I/O) for easy testing.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Monetary amount with two decimal places of precision
pub type Amount = Decimal;

/// Round an amount to two decimal places
///
/// Uses the round-half-away-from-zero convention, so `1.235` becomes `1.24`
/// and `-1.235` becomes `-1.24`. Applied to parsed user input and to every
/// credit/debit arithmetic result, so the stored balance never carries more
/// than two fractional digits.
pub fn round2(amount: Amount) -> Amount {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse a raw amount string into a normalized amount
///
/// The input is trimmed and parsed as a decimal number, then rounded to two
/// decimal places. An unparsable string normalizes to `0.00` rather than
/// raising an error; crediting or debiting `0.00` succeeds and leaves the
/// balance effectively unchanged, so garbage input degrades to a no-op.
///
/// # Arguments
///
/// * `raw` - The raw amount string as read from the console
///
/// # Returns
///
/// The parsed amount rounded to two decimal places, or `0.00` if the input
/// is not a valid decimal number.
pub fn parse_amount(raw: &str) -> Amount {
    Decimal::from_str(raw.trim())
        .map(round2)
        .unwrap_or(Decimal::ZERO)
}

/// Format an amount with exactly two fractional digits
///
/// `Decimal` preserves the scale of its inputs, so a balance can internally
/// be `1000` or `1000.00` depending on how it was produced. Console output
/// always goes through this helper to pin the rendering to two digits.
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}
