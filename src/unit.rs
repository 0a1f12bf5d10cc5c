use itertools::Itertools;
use lazy_static::lazy_static;
use maplit::hashmap;
use static_assertions::assert_impl_all;
use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The number of millimeters in one inch.
pub const MILLIMETERS_PER_INCH: f64 = 25.4;

/// A length unit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Unit {
    Inch,
    Foot,
    Millimeter,
    Centimeter,
    Meter,
}

assert_impl_all!(Unit: Copy, Eq, Send, Sync);

lazy_static! {
    /// Every accepted spelling of every unit, in lowercase.
    static ref UNITS: HashMap<&'static str, Unit> = hashmap! [
        "inch" => Unit::Inch,
        "inches" => Unit::Inch,
        "in" => Unit::Inch,
        "\"" => Unit::Inch,
        "\u{2033}" => Unit::Inch, // `″`, double prime.
        "foot" => Unit::Foot,
        "feet" => Unit::Foot,
        "ft" => Unit::Foot,
        "'" => Unit::Foot,
        "\u{2032}" => Unit::Foot, // `′`, prime.
        "millimeter" => Unit::Millimeter,
        "millimeters" => Unit::Millimeter,
        "mm" => Unit::Millimeter,
        "centimeter" => Unit::Centimeter,
        "centimeters" => Unit::Centimeter,
        "cm" => Unit::Centimeter,
        "meter" => Unit::Meter,
        "meters" => Unit::Meter,
        "m" => Unit::Meter,
    ];
}

impl Unit {
    /// Every unit.
    pub const ALL: [Unit; 5] = [
        Unit::Inch,
        Unit::Foot,
        Unit::Millimeter,
        Unit::Centimeter,
        Unit::Meter,
    ];

    /// Looks up a unit by one of its symbols, ignoring case.
    pub fn lookup(symbol: &str) -> Option<Unit> {
        UNITS.get(symbol.to_lowercase().as_str()).copied()
    }

    /// Returns the number of inches in one of this unit.
    pub fn factor(self) -> f64 {
        match self {
            Unit::Inch => 1.0,
            Unit::Foot => 12.0,
            Unit::Millimeter => 1.0 / MILLIMETERS_PER_INCH,
            Unit::Centimeter => 10.0 / MILLIMETERS_PER_INCH,
            Unit::Meter => 1000.0 / MILLIMETERS_PER_INCH,
        }
    }

    /// Converts a magnitude in this unit to inches.
    pub fn to_inches(self, magnitude: f64) -> f64 {
        magnitude * self.factor()
    }

    /// Returns the short symbol of this unit, `mm`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Unit::Inch => "in",
            Unit::Foot => "ft",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
        }
    }

    /// Lists the short symbols of every unit, as suggested in error messages.
    pub fn abbreviations() -> String {
        Unit::ALL.iter().map(|unit| unit.abbreviation()).join(", ")
    }

    /// Returns the plural name of this unit, as shown in expressions.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Inch => "inches",
            Unit::Foot => "feet",
            Unit::Millimeter => "millimeters",
            Unit::Centimeter => "centimeters",
            Unit::Meter => "meters",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
