//! Error types for the account ledger
//!
//! Every ledger error is recoverable: the failed operation leaves the balance
//! unchanged and the console session keeps looping. Only console I/O failure
//! is treated as fatal by the binary.
//!
//! # Error Categories
//!
//! - **Business Errors**: Insufficient funds on a debit
//! - **Arithmetic Errors**: Overflow/underflow in balance calculations
//! - **I/O Errors**: Reading from or writing to the console failed

use crate::types::Amount;
use thiserror::Error;

/// Main error type for the account ledger
///
/// Each variant includes enough context to produce a human-readable line
/// for the console session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Insufficient funds for a debit
    ///
    /// The debit is refused and the balance remains unchanged.
    #[error("Insufficient funds: balance {balance:.2}, requested {requested:.2}")]
    InsufficientFunds {
        /// Current balance
        balance: Amount,
        /// Requested debit amount
        requested: Amount,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the stored balance intact.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Arithmetic underflow would occur
    ///
    /// The operation is rejected to keep the stored balance intact.
    #[error("Arithmetic underflow in {operation}")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
    },

    /// I/O error occurred while reading from or writing to the console
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Amount, requested: Amount) -> Self {
        LedgerError::InsufficientFunds { balance, requested }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str) -> Self {
        LedgerError::ArithmeticUnderflow {
            operation: operation.to_string(),
        }
    }
}
