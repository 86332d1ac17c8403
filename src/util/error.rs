//! Error types for circstat.

use thiserror::Error;

/// Result alias for circstat operations.
pub type CircStatResult<T> = std::result::Result<T, CircStatError>;

/// Errors raised when a caller breaks an operation's contract.
///
/// Numerically degenerate inputs (an empty collection, a series without
/// circular variance) are not errors; they surface as NaN.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CircStatError {
    /// Paired sequences must have the same number of samples.
    #[error("paired sequences differ in length: x has {x_len}, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
    /// The textual range tag does not name one of the four supported ranges.
    #[error("unknown angle range {0:?}; expected one of (0, 360), (-180, 180), (0, 2pi), (-pi, pi)")]
    UnknownRange(String),
}
