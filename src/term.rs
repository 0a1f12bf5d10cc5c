mod normalize;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::error::LengthError;
use crate::number::Number;
use crate::term::normalize::normalize;
use crate::unit::Unit;

/// A single length expression contributing to a sum.
///
/// A term is usually one quantity, a number with an optional unit (`9mm`,
/// `2 1/2"`, `2.5`). A quantity without a unit is in inches. A feet quantity
/// directly followed by an inches quantity (`5' 3 1/2"`) is also one term,
/// the two being added together.
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    /// The term as the user wrote it.
    raw: String,

    /// The quantities making up the term, in order.
    quantities: Vec<Quantity>,
}

/// A number and the unit it is measured in.
#[derive(Clone, Debug, PartialEq)]
pub struct Quantity {
    /// The number as written, whitespace collapsed.
    number: String,

    /// The value of the number.
    magnitude: f64,

    /// The unit, inches if none was written.
    unit: Unit,
}

impl Quantity {
    /// Returns the value of this quantity in its own unit.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Returns the unit of this quantity.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns this quantity in inches.
    pub fn inches(&self) -> f64 {
        self.unit.to_inches(self.magnitude)
    }
}

impl Term {
    /// Returns the term as the user wrote it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the quantities making up this term.
    pub fn quantities(&self) -> &[Quantity] {
        &self.quantities
    }

    /// Returns this term in inches.
    pub fn inches(&self) -> f64 {
        self.quantities.iter().map(Quantity::inches).sum()
    }
}

/// Splits the leading numeric expression off a string.
///
/// Only locates the number; whether it is a valid number is up to `Number`.
fn split_number(string: &str) -> Option<(&str, &str)> {
    lazy_static! {
        static ref REGEX_NUMBER: Regex = Regex::new(
            r"^[-+]?\s*(?:\d+\s+\d+/\d+|\d+/\d+|\d*\.\d+|\d+\.?)"
        ).unwrap();
    }

    REGEX_NUMBER.find(string).map(|match_regex| {
        (match_regex.as_str(), &string[match_regex.end()..])
    })
}

/// Splits a leading unit token off a string, skipping whitespace before it.
///
/// The token is any run of letters or a single prime or quote mark; it is not
/// necessarily a known unit.
fn split_unit(string: &str) -> Option<(&str, &str)> {
    lazy_static! {
        static ref REGEX_UNIT: Regex = Regex::new(
            r#"^\s*(?P<unit>["\u{2033}'\u{2032}]|\p{L}+)"#
        ).unwrap();
    }

    REGEX_UNIT.captures(string).map(|captures| {
        let unit = captures.name("unit").map_or("", |capture| capture.as_str());
        let end = captures.get(0).map_or(0, |capture| capture.end());

        (unit, &string[end..])
    })
}

/// Implements parsing of strings into terms.
impl FromStr for Term {
    type Err = LengthError;

    fn from_str(raw: &str) -> Result<Term, LengthError> {
        let error_parse = || LengthError::Parse {term: raw.to_string()};

        let string = normalize(raw);
        let mut string_remaining = string.trim();

        let mut quantities = vec![];

        while !string_remaining.is_empty() {
            let (string_number, string_after_number) = split_number(string_remaining)
            .ok_or_else(error_parse)?;

            let magnitude = string_number.parse::<Number>()
            .map_err(|error| error.in_term(raw))?
            .value();

            let (unit, string_after_unit) = match split_unit(string_after_number) {
                Some((symbol, string_after_unit)) => {
                    let unit = Unit::lookup(symbol).ok_or_else(|| {
                        LengthError::UnsupportedUnit {
                            term: raw.to_string(),
                            unit: symbol.to_string(),
                        }
                    })?;

                    (unit, string_after_unit)
                }
                // Unitless numbers are inches.
                None => (Unit::Inch, string_after_number),
            };

            quantities.push(Quantity {
                number: string_number.split_whitespace().join(" "),
                magnitude,
                unit,
            });

            string_remaining = string_after_unit.trim_start();
        }

        // A term is one quantity, or feet followed by inches.
        match quantities.as_slice() {
            [_] => {}
            [feet, inches] if feet.unit == Unit::Foot && inches.unit == Unit::Inch => {}
            _ => return Err(error_parse()),
        }

        let term = Term {raw: raw.to_string(), quantities};

        // A finite number of feet or meters can still overflow as inches.
        if !term.inches().is_finite() {
            return Err(LengthError::OutOfRange {term: term.raw});
        }

        Ok(term)
    }
}

/// Writes the term with every unit spelled out, `9 millimeters`.
impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self.quantities().iter()
        .map(|quantity| format!("{} {}", quantity.number, quantity.unit))
        .join(" ");

        f.write_str(&string)
    }
}
