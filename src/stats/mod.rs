//! Circular statistics over raw angle values.

pub mod correlation;
pub mod distance;
pub mod mean;

#[cfg(feature = "rayon")]
pub mod rayon;

pub use correlation::{circular_correlation, sine_deviations};
pub use distance::{degree_distance, radian_distance, signed_circular_distance};
pub use mean::{degree_mean, mean_resultant_length, radian_mean, TrigMoment};

#[cfg(feature = "rayon")]
pub use self::rayon::circular_correlation_par;
