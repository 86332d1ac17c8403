//! Low-level building blocks behind the top-level API.
//!
//! Exposes the raw conversion table and the half-turn shift helpers for
//! callers that want to apply a conversion to many values without going
//! through [`convert`](crate::convert) each time.

pub use crate::angle::{Converter, CONVERSION_TABLE};
pub use crate::stats::correlation::sine_deviations;
pub use crate::stats::distance::signed_circular_distance;
pub use crate::stats::mean::TrigMoment;
pub use crate::util::math::{
    deg_180_to_360, deg_360_to_180, rad_2pi_to_pi, rad_pi_to_2pi, TWO_PI,
};
