//! Ledger state module
//!
//! This module provides the `Ledger` struct which owns the single session
//! balance and the operations that mutate it.
//!
//! The Ledger is responsible for:
//! - Holding the in-memory balance for one session
//! - Normalizing every amount to two decimal places at the operation boundary
//! - Crediting unconditionally and debiting only when funds are sufficient
//!
//! The balance is an explicitly owned value, not process-global state, so
//! multiple independent sessions (and tests) can run without
//! cross-contamination.

use crate::types::{round2, Amount, LedgerError};
use rust_decimal::Decimal;

/// Balance every session starts with
pub const INITIAL_BALANCE_CENTS: i64 = 100_000;

/// Owns the session balance and its credit/debit operations
///
/// The Ledger maintains exactly one piece of state, the current balance.
/// Every operation rounds its input and its result to two decimal places,
/// so the stored balance never carries more than two fractional digits.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    /// Current balance, always normalized to two decimal places
    balance: Amount,
}

impl Ledger {
    /// Create a new Ledger with the fixed initial balance of 1000.00
    pub fn new() -> Self {
        Ledger {
            balance: Decimal::new(INITIAL_BALANCE_CENTS, 2),
        }
    }

    /// Create a Ledger with an arbitrary starting balance
    ///
    /// The starting balance is normalized to two decimal places.
    pub fn with_balance(balance: Amount) -> Self {
        Ledger {
            balance: round2(balance),
        }
    }

    /// Get the current balance
    ///
    /// No side effects; always succeeds.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Administrative override of the balance
    ///
    /// Normalizes the input to two decimal places and stores it unchecked.
    /// Used for session resets and test setup.
    pub fn set_balance(&mut self, balance: Amount) {
        self.balance = round2(balance);
    }

    /// Credit funds to the balance
    ///
    /// Normalizes the amount, adds it to the balance, and stores the rounded
    /// sum. There is no sign or magnitude validation: negative amounts are
    /// accepted and reduce the balance, and there is no upper bound short of
    /// the decimal type's range.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to credit
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the credit was applied
    /// * `Err(LedgerError)` - If adding the amount would overflow
    pub fn credit(&mut self, amount: Amount) -> Result<(), LedgerError> {
        let amount = round2(amount);

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("credit"))?;

        self.balance = round2(new_balance);

        Ok(())
    }

    /// Debit funds from the balance
    ///
    /// Normalizes the amount and validates that sufficient funds exist before
    /// processing: the balance must remain at or above zero after the debit.
    /// A refused debit leaves the balance unchanged.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to debit
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the debit was applied
    /// * `Err(LedgerError)` - If funds are insufficient or underflow would occur
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The debit amount exceeds the current balance
    /// - Subtracting the amount from the balance would underflow
    pub fn debit(&mut self, amount: Amount) -> Result<(), LedgerError> {
        let amount = round2(amount);

        if self.balance < amount {
            return Err(LedgerError::insufficient_funds(self.balance, amount));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_underflow("debit"))?;

        self.balance = round2(new_balance);

        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn amount(cents: i64) -> Amount {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_initial_balance_is_1000() {
        let ledger = Ledger::new();
        assert_eq!(ledger.balance(), amount(100_000));
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Ledger::default(), Ledger::new());
    }

    #[rstest]
    #[case::positive(amount(25_000), amount(125_000))]
    #[case::zero(amount(0), amount(100_000))]
    #[case::negative(amount(-5_000), amount(95_000))]
    #[case::very_large(amount(100_000_000), amount(100_100_000))]
    fn test_credit_always_succeeds(#[case] credit: Amount, #[case] expected: Amount) {
        let mut ledger = Ledger::new();
        assert!(ledger.credit(credit).is_ok());
        assert_eq!(ledger.balance(), expected);
    }

    #[test]
    fn test_credit_rounds_to_nearest_cent() {
        let mut ledger = Ledger::new();
        // 1.234 rounds to 1.23
        ledger.credit(Decimal::new(1234, 3)).unwrap();
        assert_eq!(ledger.balance(), amount(100_123));
    }

    #[test]
    fn test_credit_rounds_half_away_from_zero() {
        let mut ledger = Ledger::new();
        // 1.235 rounds to 1.24, not 1.23
        ledger.credit(Decimal::new(1235, 3)).unwrap();
        assert_eq!(ledger.balance(), amount(100_124));
    }

    #[rstest]
    #[case::partial(amount(20_000), amount(80_000))]
    #[case::exact_balance(amount(100_000), amount(0))]
    #[case::zero(amount(0), amount(100_000))]
    fn test_debit_with_sufficient_funds(#[case] debit: Amount, #[case] expected: Amount) {
        let mut ledger = Ledger::new();
        assert!(ledger.debit(debit).is_ok());
        assert_eq!(ledger.balance(), expected);
    }

    #[test]
    fn test_debit_insufficient_funds_leaves_balance_unchanged() {
        let mut ledger = Ledger::with_balance(amount(10_000));
        let result = ledger.debit(amount(20_000));

        assert_eq!(
            result,
            Err(LedgerError::insufficient_funds(
                amount(10_000),
                amount(20_000)
            ))
        );
        assert_eq!(ledger.balance(), amount(10_000));
    }

    #[test]
    fn test_debit_normalizes_before_sufficiency_check() {
        // 100.004 rounds to 100.00, which the balance covers exactly
        let mut ledger = Ledger::with_balance(amount(10_000));
        assert!(ledger.debit(Decimal::new(100_004, 3)).is_ok());
        assert_eq!(ledger.balance(), amount(0));
    }

    #[test]
    fn test_sequential_operations() {
        let mut ledger = Ledger::new();
        ledger.credit(amount(50_000)).unwrap();
        let result = ledger.debit(amount(20_000));

        assert!(result.is_ok());
        assert_eq!(ledger.balance(), amount(130_000));
    }

    #[test]
    fn test_set_balance_normalizes() {
        let mut ledger = Ledger::new();
        // 12.345 rounds to 12.35 (half away from zero)
        ledger.set_balance(Decimal::new(12_345, 3));
        assert_eq!(ledger.balance(), amount(1235));
    }

    #[test]
    fn test_reinitialized_ledger_resets_to_initial_balance() {
        let mut ledger = Ledger::new();
        ledger.credit(amount(99_900)).unwrap();

        // A fresh session starts over at 1000.00 regardless of prior history
        let ledger = Ledger::new();
        assert_eq!(ledger.balance(), amount(100_000));
    }
}
