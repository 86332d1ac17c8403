//! Circular analogue of Pearson's product-moment correlation.
//!
//! Both series are first converted to `[0, 2π)`, centered on their own
//! circular mean through the signed radian distance, and then correlated on
//! the sines of those deviations. A series without circular variance makes
//! the denominator zero and the coefficient NaN.

use crate::angle::AngleRange;
use crate::stats::distance::radian_distance;
use crate::stats::mean::radian_mean;
use crate::trace::{trace_event, trace_span};
use crate::util::{CircStatError, CircStatResult};

/// Range every series is normalized into before correlating.
pub(crate) const WORKING_RANGE: AngleRange = AngleRange::Rad0To2Pi;

/// Returns `sin(radian_distance(mean, θᵢ))` for every angle.
pub fn sine_deviations(angles_rad: &[f64], mean_rad: f64) -> Vec<f64> {
    angles_rad
        .iter()
        .map(|&angle| radian_distance(mean_rad, angle).sin())
        .collect()
}

pub(crate) fn check_paired_lengths(x: &[f64], y: &[f64]) -> CircStatResult<()> {
    if x.len() != y.len() {
        return Err(CircStatError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(())
}

pub(crate) fn to_working_range(values: &[f64], range: AngleRange) -> Vec<f64> {
    let to_working = range.converter_to(WORKING_RANGE);
    values.iter().map(|&v| to_working(v)).collect()
}

/// Computes the circular correlation coefficient of two paired series.
///
/// `x` holds angles in `range_x` and `y` angles in `range_y`; the two ranges
/// may differ. Returns a value in `[-1, 1]`, or NaN when either series has
/// zero circular variance.
///
/// # Errors
/// Returns [`CircStatError::LengthMismatch`] when the series differ in length.
pub fn circular_correlation(
    x: &[f64],
    range_x: AngleRange,
    y: &[f64],
    range_y: AngleRange,
) -> CircStatResult<f64> {
    check_paired_lengths(x, y)?;
    let _span = trace_span!("circular_correlation", n = x.len()).entered();

    let x_rad = to_working_range(x, range_x);
    let y_rad = to_working_range(y, range_y);
    let mean_x = radian_mean(&x_rad);
    let mean_y = radian_mean(&y_rad);

    let dev_x = sine_deviations(&x_rad, mean_x);
    let dev_y = sine_deviations(&y_rad, mean_y);

    let cross: f64 = dev_x.iter().zip(&dev_y).map(|(a, b)| a * b).sum();
    let ss_x: f64 = dev_x.iter().map(|a| a * a).sum();
    let ss_y: f64 = dev_y.iter().map(|b| b * b).sum();
    let coefficient = cross / (ss_x * ss_y).sqrt();

    trace_event!(
        "circular correlation computed",
        mean_x = mean_x,
        mean_y = mean_y,
        coefficient = coefficient
    );
    Ok(coefficient)
}
