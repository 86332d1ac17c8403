//! Rayon-parallel correlation (feature-gated).
//!
//! Produces the same statistic as [`circular_correlation`](super::circular_correlation),
//! splitting the conversion, moment and deviation passes across the rayon
//! pool. Reduction order differs from the sequential path, so results agree
//! to rounding rather than bit for bit.

use crate::angle::AngleRange;
use crate::stats::correlation::{check_paired_lengths, WORKING_RANGE};
use crate::stats::distance::radian_distance;
use crate::trace::{trace_event, trace_span};
use crate::util::CircStatResult;
use rayon::prelude::*;

fn radian_mean_par(angles_rad: &[f64]) -> f64 {
    let n = angles_rad.len() as f64;
    let (sin_sum, cos_sum) = angles_rad
        .par_iter()
        .map(|a| a.sin_cos())
        .reduce(|| (0.0, 0.0), |(s0, c0), (s1, c1)| (s0 + s1, c0 + c1));
    ((1.0 / n) * sin_sum).atan2((1.0 / n) * cos_sum)
}

fn sine_deviations_par(values: &[f64], range: AngleRange) -> Vec<f64> {
    let to_working = range.converter_to(WORKING_RANGE);
    let radians: Vec<f64> = values.par_iter().map(|&v| to_working(v)).collect();
    let mean = radian_mean_par(&radians);
    radians
        .par_iter()
        .map(|&angle| radian_distance(mean, angle).sin())
        .collect()
}

/// Parallel circular correlation coefficient of two paired series.
///
/// # Errors
/// Returns [`CircStatError::LengthMismatch`](crate::CircStatError::LengthMismatch)
/// when the series differ in length.
pub fn circular_correlation_par(
    x: &[f64],
    range_x: AngleRange,
    y: &[f64],
    range_y: AngleRange,
) -> CircStatResult<f64> {
    check_paired_lengths(x, y)?;
    let _span = trace_span!("circular_correlation_par", n = x.len()).entered();

    let (dev_x, dev_y) = rayon::join(
        || sine_deviations_par(x, range_x),
        || sine_deviations_par(y, range_y),
    );
    let (cross, ss_x, ss_y) = dev_x
        .par_iter()
        .zip(dev_y.par_iter())
        .map(|(a, b)| (a * b, a * a, b * b))
        .reduce(
            || (0.0, 0.0, 0.0),
            |(c0, x0, y0), (c1, x1, y1)| (c0 + c1, x0 + x1, y0 + y1),
        );
    let coefficient = cross / (ss_x * ss_y).sqrt();

    trace_event!("parallel circular correlation computed", coefficient = coefficient);
    Ok(coefficient)
}
