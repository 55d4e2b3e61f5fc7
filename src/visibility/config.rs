//! Tunable tolerances for the radial sweep.

use crate::error::VisibilityError;
use num_traits::Float;

/// Tolerances used by [`visibility_polygon_with_config`](super::visibility_polygon_with_config).
///
/// The defaults suit pixel-scale scenes (coordinates in the hundreds).
/// Scale `weld_distance` with the coordinate range of the caller.
///
/// # Example
///
/// ```
/// use sightfield::visibility::VisibilityConfig;
///
/// let config: VisibilityConfig<f64> = VisibilityConfig::default()
///     .with_weld_distance(0.01)
///     .with_arc_samples(64);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityConfig<F> {
    /// Angle in radians added to and subtracted from each endpoint ray.
    pub angle_jitter: F,
    /// Consecutive vertices strictly closer than this in both x and y are
    /// merged. Zero disables merging, so coincident vertices are all kept.
    pub weld_distance: F,
    /// Number of evenly spaced rays used to trace unoccluded arcs.
    ///
    /// Arc rays contribute where they reach the sight radius or stop on a
    /// segment extending past it. Zero restores the endpoint-only sweep.
    pub arc_samples: usize,
}

impl<F: Float> VisibilityConfig<F> {
    /// Sets the endpoint ray jitter.
    pub fn with_angle_jitter(mut self, angle_jitter: F) -> Self {
        self.angle_jitter = angle_jitter;
        self
    }

    /// Sets the vertex weld distance.
    pub fn with_weld_distance(mut self, weld_distance: F) -> Self {
        self.weld_distance = weld_distance;
        self
    }

    /// Sets the number of arc rays.
    pub fn with_arc_samples(mut self, arc_samples: usize) -> Self {
        self.arc_samples = arc_samples;
        self
    }

    /// Checks that every tolerance is usable.
    pub fn validate(&self) -> Result<(), VisibilityError> {
        if !self.angle_jitter.is_finite() || self.angle_jitter <= F::zero() {
            return Err(VisibilityError::InvalidConfig(
                "angle_jitter must be positive and finite",
            ));
        }
        if self.angle_jitter >= F::from(std::f64::consts::FRAC_PI_4).unwrap() {
            return Err(VisibilityError::InvalidConfig(
                "angle_jitter must be smaller than a quarter turn",
            ));
        }
        if !self.weld_distance.is_finite() || self.weld_distance < F::zero() {
            return Err(VisibilityError::InvalidConfig(
                "weld_distance must be non-negative and finite",
            ));
        }
        Ok(())
    }
}

impl<F: Float> Default for VisibilityConfig<F> {
    fn default() -> Self {
        Self {
            angle_jitter: F::from(1e-4).unwrap(),
            weld_distance: F::from(0.1).unwrap(),
            arc_samples: 32,
        }
    }
}
