use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// A non-negative proper fraction, as shown after the whole inches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    /// Returns the fraction `numerator/denominator`, unreduced.
    pub fn new(numerator: u64, denominator: u64) -> Fraction {
        debug_assert!(denominator != 0, "Zero denominator");

        Fraction {numerator, denominator}
    }

    /// Returns this fraction in lowest terms.
    pub fn reduce(self) -> Fraction {
        let divisor = gcd(self.numerator, self.denominator);

        Fraction {
            numerator: self.numerator / divisor,
            denominator: self.denominator / divisor,
        }
    }
}

/// Returns the greatest common divisor of two integers, not both zero.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
