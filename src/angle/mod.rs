//! Angle ranges and conversions between them.
//!
//! A raw `f64` carries no range of its own; callers track which of the four
//! supported ranges a value belongs to and pass the matching [`AngleRange`]
//! wherever a conversion or a correlation needs it.

pub mod convert;

pub use convert::{convert, Converter, CONVERSION_TABLE};

use crate::util::math::TWO_PI;
use crate::util::{CircStatError, CircStatResult};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Unit family of an angle range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

/// One of the four canonical half-open angle ranges.
///
/// The discriminants index [`CONVERSION_TABLE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngleRange {
    /// `[0, 360)` degrees.
    Deg0To360 = 0,
    /// `[-180, 180)` degrees.
    DegNeg180To180 = 1,
    /// `[0, 2π)` radians.
    Rad0To2Pi = 2,
    /// `[-π, π)` radians.
    RadNegPiToPi = 3,
}

impl AngleRange {
    /// All ranges in table order.
    pub const ALL: [AngleRange; 4] = [
        AngleRange::Deg0To360,
        AngleRange::DegNeg180To180,
        AngleRange::Rad0To2Pi,
        AngleRange::RadNegPiToPi,
    ];

    /// Returns the `(lower, upper)` bounds of the half-open interval.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            AngleRange::Deg0To360 => (0.0, 360.0),
            AngleRange::DegNeg180To180 => (-180.0, 180.0),
            AngleRange::Rad0To2Pi => (0.0, TWO_PI),
            AngleRange::RadNegPiToPi => (-PI, PI),
        }
    }

    /// Returns the length of one full turn in this range's unit.
    pub fn period(self) -> f64 {
        match self.unit() {
            AngleUnit::Degrees => 360.0,
            AngleUnit::Radians => TWO_PI,
        }
    }

    /// Returns whether values in this range are degrees or radians.
    pub fn unit(self) -> AngleUnit {
        match self {
            AngleRange::Deg0To360 | AngleRange::DegNeg180To180 => AngleUnit::Degrees,
            AngleRange::Rad0To2Pi | AngleRange::RadNegPiToPi => AngleUnit::Radians,
        }
    }

    /// Returns true if `value` lies in `[lower, upper)`.
    pub fn contains(self, value: f64) -> bool {
        let (lower, upper) = self.bounds();
        value >= lower && value < upper
    }

    /// Canonical textual tag, e.g. `(0, 2pi)`.
    pub fn tag(self) -> &'static str {
        match self {
            AngleRange::Deg0To360 => "(0, 360)",
            AngleRange::DegNeg180To180 => "(-180, 180)",
            AngleRange::Rad0To2Pi => "(0, 2pi)",
            AngleRange::RadNegPiToPi => "(-pi, pi)",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AngleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AngleRange {
    type Err = CircStatError;

    /// Parses a range tag such as `(0, 360)`, `-180,180`, `(0, 2π)` or `-pi,pi`.
    fn from_str(s: &str) -> CircStatResult<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '[' | ']'))
            .collect::<String>()
            .to_ascii_lowercase()
            .replace('π', "pi");
        match normalized.as_str() {
            "0,360" => Ok(AngleRange::Deg0To360),
            "-180,180" => Ok(AngleRange::DegNeg180To180),
            "0,2pi" | "0,2*pi" => Ok(AngleRange::Rad0To2Pi),
            "-pi,pi" => Ok(AngleRange::RadNegPiToPi),
            _ => Err(CircStatError::UnknownRange(s.to_string())),
        }
    }
}
