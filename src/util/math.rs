//! Half-turn shifts between the zero-based and centered angle ranges.
//!
//! Each helper moves a value by exactly one period when it lies in the half
//! of the source range that the destination range does not cover. Values
//! are not reduced modulo the period.

use std::f64::consts::PI;

/// Full turn in radians.
pub const TWO_PI: f64 = 2.0 * PI;

/// Maps degrees from `[0, 360)` to `[-180, 180)`.
#[inline]
pub fn deg_360_to_180(angle_deg: f64) -> f64 {
    if angle_deg > 180.0 {
        angle_deg - 360.0
    } else {
        angle_deg
    }
}

/// Maps degrees from `[-180, 180)` to `[0, 360)`.
#[inline]
pub fn deg_180_to_360(angle_deg: f64) -> f64 {
    if angle_deg < 0.0 {
        angle_deg + 360.0
    } else {
        angle_deg
    }
}

/// Maps radians from `[0, 2π)` to `[-π, π)`.
#[inline]
pub fn rad_2pi_to_pi(angle_rad: f64) -> f64 {
    if angle_rad > PI {
        angle_rad - TWO_PI
    } else {
        angle_rad
    }
}

/// Maps radians from `[-π, π)` to `[0, 2π)`.
#[inline]
pub fn rad_pi_to_2pi(angle_rad: f64) -> f64 {
    if angle_rad < 0.0 {
        angle_rad + TWO_PI
    } else {
        angle_rad
    }
}
