use tracing::debug;

use crate::error::LengthError;
use crate::term::Term;

/// The sum of a run's terms.
#[derive(Clone, Debug, PartialEq)]
pub struct SumResult {
    /// The total length in inches.
    inches: f64,

    /// The terms summed, in input order.
    terms: Vec<Term>,
}

impl SumResult {
    /// Parses and sums the given term strings.
    ///
    /// Stops at the first term that fails to parse; no partial sum is
    /// produced.
    pub fn from_terms(terms: &[impl AsRef<str>]) -> Result<SumResult, LengthError> {
        let terms = terms.iter()
        .map(|term| term.as_ref().parse::<Term>())
        .collect::<Result<Vec<Term>, LengthError>>()?;

        SumResult::new(terms)
    }

    /// Sums already parsed terms.
    ///
    /// Fails on the term that takes the running total out of range.
    pub fn new(terms: Vec<Term>) -> Result<SumResult, LengthError> {
        let mut inches = 0.0;

        for term in terms.iter() {
            debug!(
                term = term.raw(),
                quantities = term.quantities().len(),
                inches = term.inches(),
                "Parsed term"
            );

            inches += term.inches();

            if !inches.is_finite() {
                return Err(LengthError::OutOfRange {term: term.raw().to_string()});
            }
        }

        debug!(inches, count = terms.len(), "Summed terms");

        Ok(SumResult {inches, terms})
    }

    /// Returns the total length in inches.
    pub fn inches(&self) -> f64 {
        self.inches
    }

    /// Returns the summed terms.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}
