use lazy_static::lazy_static;
use regex::Captures;
use regex::Regex;
use std::str::FromStr;

use crate::error::LengthError;

/// Represents the magnitude of a length.
///
/// A number is written in one of three forms, tried in this order:
///
///   - Mixed numbers, `2 1/2`;
///   - Simple fractions, `1/8`; and
///   - Decimals and integers, `2.5`, `-3` and `.5`.
///
/// Each form takes an optional leading sign that applies to the whole
/// number, so `-2 1/2` is `-(2 + 1/2)`. The whitespace between the whole part
/// and the fraction of a mixed number is what distinguishes it: `21/2` is the
/// fraction twenty-one halves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number {
    value: f64,
}

impl Number {
    /// Returns the value of this number.
    pub fn value(self) -> f64 {
        self.value
    }
}

/// The written forms of a number.
enum Form {
    Mixed,
    Fraction,
    Decimal,
}

lazy_static! {
    /// Possible regexes that a valid number string can match with, in order
    /// of precedence.
    static ref REGEXES: Vec<(Form, Regex)> = vec![
        // Strings of the form w n/d.
        (Form::Mixed, Regex::new(
            r"^(?P<sign>[-+]?)\s*(?P<whole>\d+)\s+(?P<numerator>\d+)/(?P<denominator>\d+)$"
        ).unwrap()),
        // Strings of the form n/d.
        (Form::Fraction, Regex::new(
            r"^(?P<sign>[-+]?)\s*(?P<numerator>\d+)/(?P<denominator>\d+)$"
        ).unwrap()),
        // Strings of the form n, n.m and .m.
        (Form::Decimal, Regex::new(
            r"^(?P<sign>[-+]?)\s*(?P<decimal>\d+(?:\.\d*)?|\.\d+)$"
        ).unwrap()),
    ];
}

/// Implements parsing of strings into numbers.
impl FromStr for Number {
    type Err = LengthError;

    fn from_str(string: &str) -> Result<Number, LengthError> {
        let string = string.trim();

        let error_parse = || LengthError::Parse {term: string.to_string()};

        // The forms are mutually exclusive, so precedence only matters if a
        // regex is loosened later.
        debug_assert!({
            REGEXES.iter().filter(|(_, regex)| regex.is_match(string)).count() <= 1
        }, "Matched multiple regexes");

        let (form, captures) = REGEXES.iter()
        .find_map(|(form, regex)| regex.captures(string).map(|captures| (form, captures)))
        .ok_or_else(error_parse)?;

        // Finds the given capture group and parses it as a magnitude.
        let capture_part = |captures: &Captures, name: &str| -> Result<f64, LengthError> {
            captures.name(name)
            .ok_or_else(error_parse)?
            .as_str()
            .parse::<f64>()
            .map_err(|_| error_parse())
        };

        // Parses the numerator and denominator of a fraction.
        let fraction = |captures: &Captures| -> Result<f64, LengthError> {
            let numerator = capture_part(captures, "numerator")?;
            let denominator = capture_part(captures, "denominator")?;

            if denominator == 0.0 {
                return Err(LengthError::DivisionByZero {term: string.to_string()});
            }

            Ok(numerator / denominator)
        };

        let magnitude = match form {
            Form::Mixed =>
                capture_part(&captures, "whole")? + fraction(&captures)?,
            Form::Fraction =>
                fraction(&captures)?,
            Form::Decimal =>
                capture_part(&captures, "decimal")?,
        };

        // Enough digits overflow to infinity.
        if !magnitude.is_finite() {
            return Err(LengthError::OutOfRange {term: string.to_string()});
        }

        let value = if &captures["sign"] == "-" {
            -magnitude
        }
        else {
            magnitude
        };

        Ok(Number {value})
    }
}
