use clap::Parser;

use sumlen::format::FormatOptions;
use sumlen::format::DENOMINATOR_DEFAULT;
use sumlen::format::PRECISION_DEFAULT;

/// Sums lengths in mixed units and prints the total in inches and millimeters.
#[derive(Debug, Parser)]
#[command(name = "sumlen", version, allow_negative_numbers = true)]
#[command(after_help = "Examples:\n  sumlen '2 1/2\" + 5.535\" + 9mm'\n  sumlen \"5' 3\\\"\" 2.5\n  sumlen 100mm 4in 5cm")]
pub struct Cli {
    /// Lengths to sum. A single argument is split on `+` and `,`; with no
    /// arguments, lengths are read one per line until a blank line
    pub lengths: Vec<String>,

    /// Decimal places of the decimal inches
    #[arg(short, long, default_value_t = PRECISION_DEFAULT as u8,
        value_parser = clap::value_parser!(u8).range(0..=6))]
    pub precision: u8,

    /// Denominator the fractional inches are rounded to
    #[arg(short, long, default_value_t = DENOMINATOR_DEFAULT,
        value_parser = clap::value_parser!(u64).range(2..=128))]
    pub denominator: u64,

    /// Do not copy the result to the clipboard
    #[arg(long)]
    pub no_copy: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Returns the display options selected on the command line.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            precision: usize::from(self.precision),
            denominator: self.denominator,
        }
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sumlen", "9mm"]).unwrap();

        assert_eq!(cli.lengths, vec!["9mm"]);
        assert_eq!(cli.format_options(), FormatOptions::default());
        assert!(!cli.no_copy);
        assert_eq!(cli.verbose, 0);
    }

    #[rstest]
    #[case(vec!["sumlen"]                          , vec![])]
    #[case(vec!["sumlen", "2.5", "3.5"]            , vec!["2.5", "3.5"])]
    #[case(vec!["sumlen", "-2.5", "3.5"]           , vec!["-2.5", "3.5"])]
    #[case(vec!["sumlen", "--no-copy", "5' 3\""]   , vec!["5' 3\""])]
    #[case(vec!["sumlen", "-vv", "1", "--", "-1"]  , vec!["1", "-1"])]
    #[trace]
    fn test_lengths(#[case] arguments: Vec<&str>, #[case] expected: Vec<&str>) {
        let cli = Cli::try_parse_from(arguments).unwrap();

        assert_eq!(cli.lengths, expected);
    }

    #[rstest]
    #[case(vec!["sumlen", "-p", "7"])]
    #[case(vec!["sumlen", "-d", "1"])]
    #[case(vec!["sumlen", "-d", "256"])]
    #[trace]
    fn test_options_out_of_range(#[case] arguments: Vec<&str>) {
        assert!(Cli::try_parse_from(arguments).is_err());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from(["sumlen", "-p", "3", "-d", "32", "-vv", "1"]).unwrap();

        assert_eq!(cli.format_options(), FormatOptions {precision: 3, denominator: 32});
        assert_eq!(cli.verbose, 2);
    }
}
