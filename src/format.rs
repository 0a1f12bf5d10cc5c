mod fraction;

use itertools::Itertools;
use static_assertions::const_assert;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::format::fraction::Fraction;
use crate::sum::SumResult;
use crate::term::Term;
use crate::unit::MILLIMETERS_PER_INCH;

/// The default number of decimal places of decimal inches.
pub const PRECISION_DEFAULT: usize = 2;

/// The default denominator of fractional inches; sixteenths of an inch.
pub const DENOMINATOR_DEFAULT: u64 = 16;

// Tape measure graduations halve down to the smallest mark.
const_assert!(DENOMINATOR_DEFAULT.is_power_of_two());

/// Options controlling how a sum is displayed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormatOptions {
    /// The number of decimal places of decimal inches.
    pub precision: usize,

    /// The denominator fractional inches are rounded to.
    pub denominator: u64,
}

impl Default for FormatOptions {
    fn default() -> FormatOptions {
        FormatOptions {
            precision: PRECISION_DEFAULT,
            denominator: DENOMINATOR_DEFAULT,
        }
    }
}

/// A sum rendered for display.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// The terms summed, `sum (9 millimeters + 2.5 inches)`.
    pub expression: String,

    /// The total in decimal inches, `8.39"`.
    pub decimal: String,

    /// The total in fractional inches, `8 3/8"`.
    pub fractional: String,

    /// The total in millimeters, `213 mm`.
    pub millimeters: String,
}

impl Report {
    /// Renders a sum.
    pub fn new(result: &SumResult, options: &FormatOptions) -> Report {
        Report {
            expression: format_expression(result.terms()),
            decimal: format_decimal_inches(result.inches(), options.precision),
            fractional: format_fractional_inches(result.inches(), options.denominator),
            millimeters: format_millimeters(result.inches()),
        }
    }

    /// Returns the three result lines, as copied to the clipboard.
    pub fn result_lines(&self) -> String {
        format!("{}\n{}\n{}\n", self.decimal, self.fractional, self.millimeters)
    }
}

/// Writes the report as shown on the console.
impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Expression:")?;
        writeln!(f, "  {}", self.expression)?;
        writeln!(f)?;
        writeln!(f, "Result:")?;
        writeln!(f, "  {}", self.decimal)?;
        writeln!(f, "  {}", self.fractional)?;
        writeln!(f, "  {}", self.millimeters)
    }
}

/// Formats terms as a sum with every unit spelled out.
pub fn format_expression(terms: &[Term]) -> String {
    format!("sum ({})", terms.iter().join(" + "))
}

/// Formats inches as a decimal, `8.39"`.
pub fn format_decimal_inches(inches: f64, precision: usize) -> String {
    format!("{:.*}\"", precision, inches)
}

/// Formats inches as whole inches and a fraction in lowest terms, `8 3/8"`.
///
/// The fraction is rounded to the nearest `1/denominator` of an inch. A
/// fraction that rounds up to a whole inch is carried, and a zero fraction is
/// left out.
pub fn format_fractional_inches(inches: f64, denominator: u64) -> String {
    let sign = if inches < 0.0 {"-"} else {""};
    let magnitude = inches.abs();

    // Whole inches stay a float; totals can exceed every integer type.
    let mut whole = magnitude.trunc();
    let mut numerator = ((magnitude - whole) * denominator as f64).round() as u64;

    if numerator == denominator {
        whole += 1.0;
        numerator = 0;
    }

    if numerator == 0 {
        // No `-0"`.
        if whole == 0.0 {
            return "0\"".to_string();
        }

        return format!("{}{:.0}\"", sign, whole);
    }

    let fraction = Fraction::new(numerator, denominator).reduce();

    if whole == 0.0 {
        format!("{}{}\"", sign, fraction)
    }
    else {
        format!("{}{:.0} {}\"", sign, whole, fraction)
    }
}

/// Formats inches as whole millimeters, `213 mm`.
pub fn format_millimeters(inches: f64) -> String {
    // Adding zero turns `-0` into `0`.
    let millimeters = (inches * MILLIMETERS_PER_INCH).round() + 0.0;

    format!("{:.0} mm", millimeters)
}
