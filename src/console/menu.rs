//! Menu rendering and choice parsing
//!
//! This module centralizes the fixed console text and the mapping from a raw
//! input line to a menu choice. All functions are pure (no I/O) for easy
//! testing.

/// Fixed menu block printed before every prompt cycle
pub const MENU_TEXT: &str = "--------------------------------\n\
Account Management System\n\
1. View Balance\n\
2. Credit Account\n\
3. Debit Account\n\
4. Exit\n\
--------------------------------";

/// Prompt for the menu choice (printed without a trailing newline)
pub const CHOICE_PROMPT: &str = "Enter your choice (1-4): ";

/// Prompt for a credit amount (printed without a trailing newline)
pub const CREDIT_PROMPT: &str = "Enter credit amount: ";

/// Prompt for a debit amount (printed without a trailing newline)
pub const DEBIT_PROMPT: &str = "Enter debit amount: ";

/// Message for an unparsable or out-of-range menu choice
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice, please select 1-4.";

/// Farewell line printed when the session ends
pub const FAREWELL_MESSAGE: &str = "Exiting the program. Goodbye!";

/// Menu choices available in the console session
///
/// Each variant corresponds to one numbered item of the fixed menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Print the current balance
    ViewBalance,
    /// Read an amount and credit it to the balance
    Credit,
    /// Read an amount and debit it from the balance
    Debit,
    /// End the session
    Exit,
}

/// Parse a raw input line into a menu choice
///
/// The line is trimmed and parsed as an integer. Anything that is not an
/// integer between 1 and 4 yields `None`, which the session reports as an
/// invalid choice and re-loops without touching the balance.
pub fn parse_choice(raw: &str) -> Option<MenuChoice> {
    match raw.trim().parse::<i64>() {
        Ok(1) => Some(MenuChoice::ViewBalance),
        Ok(2) => Some(MenuChoice::Credit),
        Ok(3) => Some(MenuChoice::Debit),
        Ok(4) => Some(MenuChoice::Exit),
        _ => None,
    }
}
