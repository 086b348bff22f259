//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `amount`: Monetary amount type and normalization helpers
//! - `error`: Error types for the account ledger

pub mod amount;
pub mod error;

pub use amount::{format_amount, parse_amount, round2, Amount};
pub use error::LedgerError;
