//! Interactive console session
//!
//! This module provides the `Session` driver that wires the fixed menu to the
//! ledger: it repeatedly renders the menu, reads a choice, reads an amount
//! for credit/debit choices, dispatches to the `Ledger`, and prints the
//! outcome until the exit choice is selected.
//!
//! # Design
//!
//! The session is generic over `BufRead` and `Write` rather than touching
//! stdin/stdout directly, so whole interactions can be driven from in-memory
//! buffers in tests. Execution is strictly sequential: one prompt, one line,
//! one ledger operation at a time.
//!
//! # Error Handling
//!
//! Ledger errors (insufficient funds, arithmetic guards) are surfaced as a
//! single line and the loop continues; no ledger error ends the session.
//! Only an I/O failure on the underlying reader/writer aborts the run.

use crate::console::menu::{
    parse_choice, MenuChoice, CHOICE_PROMPT, CREDIT_PROMPT, DEBIT_PROMPT, FAREWELL_MESSAGE,
    INVALID_CHOICE_MESSAGE, MENU_TEXT,
};
use crate::core::Ledger;
use crate::types::{format_amount, parse_amount, Amount, LedgerError};
use std::io::{BufRead, Write};

/// Interactive console session over a ledger
///
/// Owns the ledger for the duration of the run and hands it back when the
/// session ends, so callers (and tests) can inspect the final balance.
pub struct Session<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a new session over the given ledger and I/O handles
    pub fn new(ledger: Ledger, input: R, output: W) -> Self {
        Session {
            ledger,
            input,
            output,
        }
    }

    /// Run the session until the exit choice is selected
    ///
    /// Each cycle prints the menu, prompts for a choice, and dispatches:
    /// choices 1-3 perform the corresponding ledger operation and loop again,
    /// choice 4 ends the session, and anything else prints the invalid-choice
    /// message and loops. End of input is treated like the exit choice, so
    /// scripted sessions and a closed stdin terminate cleanly.
    ///
    /// # Returns
    ///
    /// * `Ok(Ledger)` - The ledger in its final state after the farewell line
    /// * `Err(LedgerError)` - If reading or writing the console failed
    pub fn run(mut self) -> Result<Ledger, LedgerError> {
        loop {
            writeln!(self.output, "{}", MENU_TEXT)?;

            let Some(line) = self.prompt(CHOICE_PROMPT)? else {
                break;
            };

            match parse_choice(&line) {
                Some(MenuChoice::ViewBalance) => self.view_balance()?,
                Some(MenuChoice::Credit) => match self.read_amount(CREDIT_PROMPT)? {
                    Some(amount) => self.apply(Ledger::credit, amount)?,
                    None => break,
                },
                Some(MenuChoice::Debit) => match self.read_amount(DEBIT_PROMPT)? {
                    Some(amount) => self.apply(Ledger::debit, amount)?,
                    None => break,
                },
                Some(MenuChoice::Exit) => break,
                None => writeln!(self.output, "{}", INVALID_CHOICE_MESSAGE)?,
            }
        }

        writeln!(self.output, "{}", FAREWELL_MESSAGE)?;

        Ok(self.ledger)
    }

    /// Print the current balance with exactly two decimal digits
    fn view_balance(&mut self) -> Result<(), LedgerError> {
        writeln!(
            self.output,
            "Current balance: {}",
            format_amount(self.ledger.balance())
        )?;
        Ok(())
    }

    /// Apply a ledger operation, surfacing a refusal as one output line
    ///
    /// Refusals are not fatal; the balance is unchanged and the loop
    /// continues.
    fn apply(
        &mut self,
        operation: fn(&mut Ledger, Amount) -> Result<(), LedgerError>,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if let Err(err) = operation(&mut self.ledger, amount) {
            writeln!(self.output, "{}", err)?;
        }
        Ok(())
    }

    /// Prompt for and read one amount line
    ///
    /// Returns `None` on end of input. The line itself is parsed
    /// permissively: anything unparsable normalizes to `0.00`.
    fn read_amount(&mut self, prompt: &str) -> Result<Option<Amount>, LedgerError> {
        Ok(self.prompt(prompt)?.map(|line| parse_amount(&line)))
    }

    /// Print a prompt (no newline) and read one input line
    ///
    /// The prompt is flushed so it appears before the session blocks on the
    /// read. Returns `None` when the input source is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, LedgerError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes_read = self.input.read_line(&mut line)?;
        if bytes_read == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }
}
