//! Trigonometric-moment mean of a collection of angles.
//!
//! None of these functions guard against an empty slice: the moment divides
//! by zero and every derived value is NaN.

/// First trigonometric moment of a set of angles: the mean sine and mean
/// cosine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrigMoment {
    /// `(1/n) Σ sin(θᵢ)`.
    pub sin_mean: f64,
    /// `(1/n) Σ cos(θᵢ)`.
    pub cos_mean: f64,
}

impl TrigMoment {
    /// Computes the moment of angles given in radians.
    pub fn from_radians(angles_rad: &[f64]) -> Self {
        let n = angles_rad.len() as f64;
        let sin_sum: f64 = angles_rad.iter().map(|a| a.sin()).sum();
        let cos_sum: f64 = angles_rad.iter().map(|a| a.cos()).sum();
        Self {
            sin_mean: (1.0 / n) * sin_sum,
            cos_mean: (1.0 / n) * cos_sum,
        }
    }

    /// Direction of the moment, `atan2(S, C)`, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.sin_mean.atan2(self.cos_mean)
    }

    /// Length of the mean resultant vector, in `[0, 1]`.
    pub fn resultant_length(&self) -> f64 {
        self.sin_mean.hypot(self.cos_mean)
    }
}

/// Circular mean of radian angles, in `(-π, π]`.
pub fn radian_mean(angles_rad: &[f64]) -> f64 {
    TrigMoment::from_radians(angles_rad).angle()
}

/// Circular mean of degree angles, in `(-180, 180]`.
pub fn degree_mean(angles_deg: &[f64]) -> f64 {
    let radians: Vec<f64> = angles_deg.iter().map(|a| a.to_radians()).collect();
    radian_mean(&radians).to_degrees()
}

/// Mean resultant length of radian angles: 1 for identical angles, near 0
/// for angles spread evenly around the circle.
pub fn mean_resultant_length(angles_rad: &[f64]) -> f64 {
    TrigMoment::from_radians(angles_rad).resultant_length()
}
