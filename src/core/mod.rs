//! Core business logic module
//!
//! This module contains the ledger state component:
//! - `ledger` - Balance ownership and the credit/debit/get/set operations

pub mod ledger;

pub use ledger::Ledger;
