//! Shortest signed distance between two angles.

use crate::util::math::TWO_PI;

/// Returns the directed walk from `from` to `to` on a circle of
/// circumference `period`, choosing the shorter way around.
///
/// At most one period is added or removed, so the result lies in
/// `[-period / 2, period / 2)` only while `to - from` stays within
/// `[-1.5 * period, 1.5 * period)`; two angles from the same range always
/// qualify. A displacement of exactly half a turn maps to `-period / 2`, so
/// `signed_circular_distance(a, b, r)` equals `-signed_circular_distance(b, a, r)`
/// everywhere except at that one value.
#[inline]
pub fn signed_circular_distance(from: f64, to: f64, period: f64) -> f64 {
    let distance = to - from;
    let half = period / 2.0;
    if distance < -half {
        return distance + period;
    }
    if distance >= half {
        return distance - period;
    }
    distance
}

/// Signed distance from `from_deg` to `to_deg`, in `[-180, 180)` degrees
/// when both angles lie within 360° of each other (e.g. both in `[0, 360)` or
/// both in `[-180, 180)`). Farther apart inputs are wrapped only once:
/// `degree_distance(0.0, 720.0)` is `360.0`.
#[inline]
pub fn degree_distance(from_deg: f64, to_deg: f64) -> f64 {
    signed_circular_distance(from_deg, to_deg, 360.0)
}

/// Signed distance from `from_rad` to `to_rad`, in `[-π, π)` radians when
/// both angles lie within 2π of each other. As with [`degree_distance`], only
/// one period is added or removed.
#[inline]
pub fn radian_distance(from_rad: f64, to_rad: f64) -> f64 {
    signed_circular_distance(from_rad, to_rad, TWO_PI)
}

#[cfg(test)]
mod tests {
    use super::{degree_distance, radian_distance, signed_circular_distance};
    use std::f64::consts::PI;

    #[test]
    fn inside_distance_is_plain_difference() {
        assert_eq!(degree_distance(10.0, 90.0), 80.0);
        assert_eq!(degree_distance(90.0, 10.0), -80.0);
    }

    #[test]
    fn distance_wraps_across_zero() {
        assert_eq!(degree_distance(350.0, 10.0), 20.0);
        assert_eq!(degree_distance(10.0, 350.0), -20.0);
    }

    #[test]
    fn half_turn_breaks_ties_negative() {
        assert_eq!(degree_distance(0.0, 180.0), -180.0);
        assert_eq!(degree_distance(180.0, 0.0), -180.0);
        assert_eq!(signed_circular_distance(0.0, 2.0, 4.0), -2.0);
    }

    #[test]
    fn radian_distance_wraps() {
        let got = radian_distance(350f64.to_radians(), 10f64.to_radians());
        assert!((got - 20f64.to_radians()).abs() < 1e-12);
        assert_eq!(radian_distance(0.0, PI), -PI);
    }

    #[test]
    fn inputs_beyond_one_period_wrap_once() {
        assert_eq!(degree_distance(0.0, 720.0), 360.0);
        assert_eq!(degree_distance(0.0, 540.0), 180.0);
        assert_eq!(degree_distance(360.0, 10.0), 10.0);
    }
}
