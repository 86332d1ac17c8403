//! Constant conversion table between the four angle ranges.
//!
//! Cross-unit conversions first shift within the source unit family and then
//! rescale, or rescale first and then shift, exactly as listed per pair below.
//! The table is a `const` of plain function pointers, so it needs no
//! initialization and is shared freely across threads.

use super::AngleRange;
use crate::util::math::{deg_180_to_360, deg_360_to_180, rad_2pi_to_pi, rad_pi_to_2pi};

/// A pure conversion from one range to another.
pub type Converter = fn(f64) -> f64;

fn identity(x: f64) -> f64 {
    x
}

fn to_radians(x: f64) -> f64 {
    x.to_radians()
}

fn to_degrees(x: f64) -> f64 {
    x.to_degrees()
}

fn deg_360_to_rad_pi(x: f64) -> f64 {
    rad_2pi_to_pi(x.to_radians())
}

fn deg_180_to_rad_2pi(x: f64) -> f64 {
    deg_180_to_360(x).to_radians()
}

fn rad_2pi_to_deg_180(x: f64) -> f64 {
    deg_360_to_180(x.to_degrees())
}

fn rad_pi_to_deg_360(x: f64) -> f64 {
    rad_pi_to_2pi(x).to_degrees()
}

/// Conversion functions indexed as `CONVERSION_TABLE[from][to]`, using the
/// discriminants of [`AngleRange`].
pub const CONVERSION_TABLE: [[Converter; 4]; 4] = [
    // from [0, 360)
    [identity, deg_360_to_180, to_radians, deg_360_to_rad_pi],
    // from [-180, 180)
    [deg_180_to_360, identity, deg_180_to_rad_2pi, to_radians],
    // from [0, 2π)
    [to_degrees, rad_2pi_to_deg_180, identity, rad_2pi_to_pi],
    // from [-π, π)
    [rad_pi_to_deg_360, to_degrees, rad_pi_to_2pi, identity],
];

impl AngleRange {
    /// Returns the conversion function from `self` into `target`.
    pub fn converter_to(self, target: AngleRange) -> Converter {
        CONVERSION_TABLE[self.index()][target.index()]
    }
}

/// Converts `x`, expressed in `from`, into the range `to`.
#[inline]
pub fn convert(x: f64, from: AngleRange, to: AngleRange) -> f64 {
    from.converter_to(to)(x)
}
