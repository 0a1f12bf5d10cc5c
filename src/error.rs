use thiserror::Error;

use crate::unit::Unit;

/// The ways a length expression can be rejected.
///
/// Every variant carries the raw term it was raised for, so the message alone
/// is enough for the user to find and fix the input.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LengthError {
    /// The numeric part of a term matches none of the number forms.
    #[error("Cannot parse \"{term}\": expected a length such as 2, 2.5, 1/2 or 2 1/2, optionally followed by a unit")]
    Parse { term: String },

    /// A fraction in the term has a zero denominator.
    #[error("Division by zero in \"{term}\"")]
    DivisionByZero { term: String },

    /// The term ends in a unit token that is not a length unit.
    #[error("Unsupported unit \"{unit}\" in \"{term}\": expected one of {}", Unit::abbreviations())]
    UnsupportedUnit { term: String, unit: String },

    /// The term, or the running total it ends, does not fit in a finite
    /// number of inches.
    #[error("Length out of range in \"{term}\"")]
    OutOfRange { term: String },

    /// Splitting left nothing to sum.
    #[error("No input lengths")]
    NoInput,
}

impl LengthError {
    /// Relabels the error with the full term it occurred in.
    ///
    /// The number parser only sees the numeric part of a term; the extractor
    /// uses this to report the whole term instead.
    pub fn in_term(self, term: &str) -> LengthError {
        let term = term.to_string();

        match self {
            LengthError::Parse {..} =>
                LengthError::Parse {term},
            LengthError::DivisionByZero {..} =>
                LengthError::DivisionByZero {term},
            LengthError::OutOfRange {..} =>
                LengthError::OutOfRange {term},
            LengthError::UnsupportedUnit {unit, ..} =>
                LengthError::UnsupportedUnit {term, unit},
            LengthError::NoInput =>
                LengthError::NoInput,
        }
    }
}
