//! Account Ledger CLI
//!
//! Interactive terminal front-end for the single-session account ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --starting-balance 250.00
//! ```
//!
//! The program repeatedly prints a four-item menu, reads a choice (and an
//! amount for credit/debit choices) from stdin, applies the operation to the
//! in-memory balance, and prints the outcome. Choice 4 ends the session.
//! Nothing is persisted across runs.
//!
//! # Exit Codes
//!
//! - 0: Session ended normally (exit choice or end of input)
//! - 1: Console I/O failure

use account_ledger::cli;
use account_ledger::console::Session;
use account_ledger::core::Ledger;
use std::io;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let ledger = Ledger::with_balance(args.starting_balance);

    // Run the interactive session over locked stdin/stdout
    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Session::new(ledger, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
