use crate::types::Amount;
use clap::Parser;

/// Interactive single-session account ledger
#[derive(Parser, Debug)]
#[command(name = "account-ledger")]
#[command(about = "Interactive account ledger with an in-memory balance", long_about = None)]
pub struct CliArgs {
    /// Starting balance for the session
    ///
    /// Administrative override of the fixed 1000.00 initial balance. Unlike
    /// interactive amount input, a malformed flag value is a usage error and
    /// rejected by clap.
    #[arg(
        long = "starting-balance",
        value_name = "AMOUNT",
        default_value = "1000.00",
        allow_negative_numbers = true,
        help = "Starting balance for the session (default: 1000.00)"
    )]
    pub starting_balance: Amount,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::default(&["program"], Decimal::new(100_000, 2))]
    #[case::custom(&["program", "--starting-balance", "250.00"], Decimal::new(25_000, 2))]
    #[case::integer(&["program", "--starting-balance", "500"], Decimal::new(500, 0))]
    #[case::negative(&["program", "--starting-balance", "-10.00"], Decimal::new(-1_000, 2))]
    fn test_starting_balance_parsing(#[case] args: &[&str], #[case] expected: Amount) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.starting_balance, expected);
    }

    #[rstest]
    #[case::non_numeric(&["program", "--starting-balance", "abc"])]
    #[case::missing_value(&["program", "--starting-balance"])]
    #[case::unknown_flag(&["program", "--balance", "100"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
