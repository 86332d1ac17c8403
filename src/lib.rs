//! circstat is a small library of circular (directional) statistics.
//!
//! It converts angles between four canonical ranges, measures the shortest
//! signed distance between two angles, averages angles by their
//! trigonometric moment and computes a circular analogue of Pearson's
//! correlation for paired angle series such as compass headings. All
//! operations are pure and stateless; parallel correlation is available via
//! the `rayon` feature and span/event output via the `tracing` feature.
//!
//! ```
//! use circstat::{circular_correlation, convert, degree_distance, degree_mean, AngleRange};
//!
//! assert_eq!(convert(270.0, AngleRange::Deg0To360, AngleRange::DegNeg180To180), -90.0);
//! assert_eq!(degree_distance(350.0, 10.0), 20.0);
//! assert!(degree_mean(&[350.0, 10.0]).abs() < 1e-9);
//!
//! let x = [-170.0, -45.0, 10.0, 95.0];
//! let y = [190.0, 315.0, 10.0, 95.0];
//! let r = circular_correlation(&x, AngleRange::DegNeg180To180, &y, AngleRange::Deg0To360)?;
//! assert!((r - 1.0).abs() < 1e-12);
//! # Ok::<(), circstat::CircStatError>(())
//! ```

pub mod angle;
pub mod lowlevel;
pub mod stats;
mod trace;
pub mod util;

pub use angle::{convert, AngleRange, AngleUnit};
pub use stats::{
    circular_correlation, degree_distance, degree_mean, mean_resultant_length, radian_distance,
    radian_mean,
};
pub use util::{CircStatError, CircStatResult};

#[cfg(feature = "rayon")]
pub use stats::circular_correlation_par;
