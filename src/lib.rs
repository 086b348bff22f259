//! Account Ledger Library
//! # Overview
//!
//! This library provides a single-session, terminal-driven account ledger:
//! one in-memory balance, a four-item menu to view, credit, or debit it, and
//! nothing persisted across runs.
//!
//! # Architecture
//!
//! The system is organized into a few small components:
//!
//! - [`types`] - Monetary amount type, normalization helpers, and errors
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic:
//!   - [`core::ledger`] - Balance ownership and the credit/debit operations
//! - [`console`] - Menu rendering and the interactive session driver
//!
//! # Amount Semantics
//!
//! Amounts are fixed-point decimals. Every amount is rounded to two decimal
//! places (half away from zero) at the operation boundary, so the balance
//! never carries more than two fractional digits. Unparsable amount input
//! normalizes to 0.00 rather than raising an error.
//!
//! # Session Semantics
//!
//! - The balance starts at 1000.00 and lives only for the session
//! - Credits are unconditional: negative and arbitrarily large amounts apply
//! - Debits require sufficient funds; a refused debit changes nothing
//! - Invalid menu choices print a message and re-loop without side effects

// Module declarations
pub mod cli;
pub mod console;
pub mod core;
pub mod types;

pub use console::{MenuChoice, Session};
pub use core::Ledger;
pub use types::{format_amount, parse_amount, round2, Amount, LedgerError};
