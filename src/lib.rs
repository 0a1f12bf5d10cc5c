//! Sums lengths written in mixed units.
//!
//! Input goes through a fixed pipeline: the inputs are split into terms, each
//! term is parsed into numbers and units and converted to inches, the inches
//! are summed, and the sum is rendered as decimal inches, fractional inches
//! and millimeters.

pub mod clipboard;
pub mod error;
pub mod format;
pub mod number;
pub mod splitter;
pub mod sum;
pub mod term;
pub mod unit;

use std::io;
use std::io::Write;

use crate::error::LengthError;
use crate::format::FormatOptions;
use crate::format::Report;
use crate::splitter::split_terms;
use crate::sum::SumResult;

/// Runs the inputs through the whole pipeline and renders the sum.
pub fn evaluate(inputs: &[impl AsRef<str>], options: &FormatOptions)
-> Result<Report, LengthError> {
    let terms = split_terms(inputs)?;
    let result = SumResult::from_terms(&terms)?;

    Ok(Report::new(&result, options))
}

/// Writes a report and hands its result lines to `copy`.
///
/// `copy` is called only once the report has been written in full.
pub fn emit(report: &Report, output: &mut impl Write, copy: impl FnOnce(&str))
-> Result<(), io::Error> {
    write!(output, "{}", report)?;
    output.flush()?;

    copy(&report.result_lines());

    Ok(())
}



#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    // Tests the pipeline from raw inputs to rendered lines.
    #[rstest]
    #[case(vec!["2 1/2\" + 5.535\" + 9mm"] , "8.39\"" , "8 3/8\""  , "213 mm")]
    #[case(vec!["2 1/2\", 5.535\", 9mm"]   , "8.39\"" , "8 3/8\""  , "213 mm")]
    #[case(vec!["5' 3\"", "2.5"]           , "65.50\"", "65 1/2\"" , "1664 mm")]
    #[case(vec!["100mm", "4in", "5cm"]     , "9.91\"" , "9 7/8\""  , "252 mm")]
    #[case(vec!["15.99"]                   , "15.99\"", "16\""     , "406 mm")]
    #[case(vec!["1 m"]                     , "39.37\"", "39 3/8\"" , "1000 mm")]
    #[case(vec!["100000000000000000000.5"] , "100000000000000000000.00\"", "100000000000000000000\"", "2540000000000000000000 mm")]
    #[trace]
    fn test_evaluate(
        #[case] inputs: Vec<&str>,
        #[case] decimal: &str,
        #[case] fractional: &str,
        #[case] millimeters: &str,
    ) {
        let report = evaluate(&inputs, &FormatOptions::default()).unwrap();

        assert_eq!(report.decimal, decimal);
        assert_eq!(report.fractional, fractional);
        assert_eq!(report.millimeters, millimeters);
    }

    // Tests that one split input and several inputs give the same sum.
    #[test]
    fn test_evaluate_split_equivalent() {
        let options = FormatOptions::default();

        assert_eq!(
            evaluate(&["2.5 + 3.5"], &options),
            evaluate(&["2.5", "3.5"], &options)
        );
    }

    #[rstest]
    #[case(LengthError::UnsupportedUnit {term: "5 furlongs".to_string(), unit: "furlongs".to_string()} , vec!["5 furlongs"])]
    #[case(LengthError::DivisionByZero {term: "1/0".to_string()}                                      , vec!["1/0"])]
    #[case(LengthError::NoInput                                                                       , vec![])]
    #[case(LengthError::NoInput                                                                       , vec![""])]
    #[trace]
    fn test_evaluate_error(#[case] expected: LengthError, #[case] inputs: Vec<&str>) {
        assert_eq!(evaluate(&inputs, &FormatOptions::default()), Err(expected));
    }

    // Tests that lengths overflowing a float are rejected rather than printed.
    #[rstest]
    #[case(vec!["9".repeat(400)])]
    #[case(vec!["1".to_string(), format!("-{} in", "9".repeat(400))])]
    #[case(vec![format!("1{} m", "0".repeat(308))])]
    #[case(vec![format!("1{}", "0".repeat(308)), format!("1{}", "0".repeat(308))])]
    #[trace]
    fn test_evaluate_out_of_range(#[case] inputs: Vec<String>) {
        let result = evaluate(&inputs, &FormatOptions::default());

        assert!(matches!(result, Err(LengthError::OutOfRange {..})), "Result: {:?}", result);
    }

    #[test]
    fn test_emit() {
        let report = evaluate(&["2 1/2\" + 5.535\" + 9mm"], &FormatOptions::default()).unwrap();

        let mut output = vec![];
        let mut copied = None;

        emit(&report, &mut output, |text| copied = Some(text.to_string())).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), report.to_string());
        assert_eq!(copied.as_deref(), Some("8.39\"\n8 3/8\"\n213 mm\n"));
    }

    // Tests custom display options.
    #[test]
    fn test_evaluate_options() {
        let options = FormatOptions {precision: 3, denominator: 8};
        let report = evaluate(&["8.389"], &options).unwrap();

        assert_eq!(report.decimal, "8.389\"");
        assert_eq!(report.fractional, "8 3/8\"");
    }
}
