use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Parameters controlling trend-line detection.
///
/// All fields are validated together by [`validate`](Self::validate)
/// before any processing starts; the pipeline never runs with a partially
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionParameters {
    /// Maximum candidate edge length. Must be positive.
    pub max_distance: f64,
    /// Minimum number of edges a path needs to survive finalization.
    pub min_edges: usize,
    /// Damping factor α in `[0, 1]` weighting turning angle against
    /// segment length. At 0 direction changes carry full weight; at 1 the
    /// extension choice degenerates to nearest-neighbour by length.
    pub damping: f64,
    /// Azimuth target in degrees, clockwise from north. Requires
    /// `azimuth_tol`.
    pub azimuth: Option<f64>,
    /// Tolerance on the azimuth target in degrees. Requires `azimuth`.
    pub azimuth_tol: Option<f64>,
}

impl DetectionParameters {
    /// Creates parameters with the given maximum distance and defaults:
    /// `min_edges` 1, `damping` 0, no azimuth filter.
    #[must_use]
    pub fn new(max_distance: f64) -> Self {
        Self {
            max_distance,
            min_edges: 1,
            damping: 0.0,
            azimuth: None,
            azimuth_tol: None,
        }
    }

    /// Sets the minimum edge count.
    #[must_use]
    pub fn with_min_edges(mut self, min_edges: usize) -> Self {
        self.min_edges = min_edges;
        self
    }

    /// Sets the damping factor.
    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Enables azimuth filtering with the given target and tolerance, both
    /// in degrees.
    #[must_use]
    pub fn with_azimuth(mut self, azimuth: f64, tolerance: f64) -> Self {
        self.azimuth = Some(azimuth);
        self.azimuth_tol = Some(tolerance);
        self
    }

    /// Validates all parameters, reporting the first violation found.
    ///
    /// # Errors
    ///
    /// Returns an error if the maximum distance is not positive and
    /// finite, the minimum edge count is zero, the damping factor is
    /// outside `[0, 1]`, the azimuth target and tolerance are not supplied
    /// together, or the tolerance is negative.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(ParameterError::NonPositiveMaxDistance(self.max_distance));
        }
        if self.min_edges == 0 {
            return Err(ParameterError::ZeroMinEdges);
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ParameterError::OutOfRange {
                parameter: "damping",
                value: self.damping,
                min: 0.0,
                max: 1.0,
            });
        }
        match (self.azimuth, self.azimuth_tol) {
            (Some(_), None) | (None, Some(_)) => {
                return Err(ParameterError::IncompleteAzimuthFilter);
            }
            (Some(_), Some(tolerance)) if tolerance < 0.0 => {
                return Err(ParameterError::NegativeAzimuthTolerance(tolerance));
            }
            _ => {}
        }
        Ok(())
    }
}
