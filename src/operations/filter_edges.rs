use crate::graph::CandidateEdge;
use crate::math::azimuth::azimuth_deviation;
use crate::params::DetectionParameters;

/// Removes candidate edges violating distance, part, or orientation
/// constraints.
///
/// The criteria are independent and applied without ordering dependence:
/// an edge is dropped when its length exceeds the maximum distance, when
/// both endpoints share a non-null part identifier, or when azimuth
/// filtering is enabled and the edge's orientation deviates from the
/// target by more than the tolerance (180°-periodic). Surviving edges
/// keep their candidate order. An empty result is valid output.
pub struct FilterEdges<'a> {
    candidates: Vec<CandidateEdge>,
    params: &'a DetectionParameters,
}

impl<'a> FilterEdges<'a> {
    /// Creates a new `FilterEdges` operation.
    ///
    /// Parameters are assumed validated; the azimuth criterion only
    /// applies when both the target and the tolerance are present.
    #[must_use]
    pub fn new(candidates: Vec<CandidateEdge>, params: &'a DetectionParameters) -> Self {
        Self { candidates, params }
    }

    /// Executes the filter, returning the surviving edges.
    #[must_use]
    pub fn execute(self) -> Vec<CandidateEdge> {
        let window = match (self.params.azimuth, self.params.azimuth_tol) {
            (Some(target), Some(tolerance)) => Some((target.rem_euclid(180.0), tolerance)),
            _ => None,
        };
        let max_distance = self.params.max_distance;

        self.candidates
            .into_iter()
            .filter(|edge| {
                if edge.length > max_distance {
                    return false;
                }
                if edge.same_part() {
                    return false;
                }
                if let Some((target, tolerance)) = window {
                    if azimuth_deviation(edge.azimuth, target) > tolerance {
                        return false;
                    }
                }
                true
            })
            .collect()
    }
}
