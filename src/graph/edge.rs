use crate::math::azimuth::azimuth_of;
use crate::math::Vector2;

use super::point::{PartId, PointSet};

/// A candidate connection between two points, produced by the graph
/// builder.
///
/// Endpoints are stored in canonical order (`start < end`). Length uses
/// the full 3D coordinates; azimuth comes from the 2D projection, which
/// must be non-degenerate (the builder never connects coincident sites).
/// Candidate edges are derived once and never mutated.
#[derive(Debug, Clone)]
pub struct CandidateEdge {
    /// Lower endpoint index.
    pub start: usize,
    /// Higher endpoint index.
    pub end: usize,
    /// 3D Euclidean length of the segment.
    pub length: f64,
    /// Azimuth of the 2D projection in degrees, in `[0, 180)`.
    pub azimuth: f64,
    /// Part identifiers of the two endpoints, in `(start, end)` order.
    pub parts: (Option<PartId>, Option<PartId>),
}

impl CandidateEdge {
    /// Derives a candidate edge between points `a` and `b` of `points`.
    #[must_use]
    pub fn between(points: &PointSet, a: usize, b: usize) -> Self {
        let (start, end) = if a < b { (a, b) } else { (b, a) };
        let p0 = points.position(start);
        let p1 = points.position(end);
        let length = (p1 - p0).norm();
        let azimuth = azimuth_of(&Vector2::new(p1.x - p0.x, p1.y - p0.y));
        Self {
            start,
            end,
            length,
            azimuth,
            parts: (points.part(start), points.part(end)),
        }
    }

    /// Returns the endpoint opposite to `index`.
    #[must_use]
    pub fn other(&self, index: usize) -> usize {
        if index == self.start {
            self.end
        } else {
            self.start
        }
    }

    /// Returns `true` when both endpoints carry the same non-null part
    /// identifier.
    #[must_use]
    pub fn same_part(&self) -> bool {
        matches!(self.parts, (Some(a), Some(b)) if a == b)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, TOLERANCE};

    fn set() -> PointSet {
        PointSet::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 4.0, 0.0),
            Point3::new(0.0, 10.0, 5.0),
        ])
        .with_parts(vec![Some(1), Some(1), None])
        .unwrap()
    }

    #[test]
    fn endpoints_are_canonical() {
        let edge = CandidateEdge::between(&set(), 1, 0);
        assert_eq!((edge.start, edge.end), (0, 1));
    }

    #[test]
    fn length_uses_elevation() {
        // Planar distance from (0,0) to (0,10) is 10; the z offset of 5
        // stretches it to √125.
        let edge = CandidateEdge::between(&set(), 0, 2);
        assert!((edge.length - 125.0_f64.sqrt()).abs() < TOLERANCE);
    }

    #[test]
    fn azimuth_ignores_elevation() {
        let edge = CandidateEdge::between(&set(), 0, 2);
        assert!(edge.azimuth.abs() < TOLERANCE, "azimuth={}", edge.azimuth);
    }

    #[test]
    fn same_part_requires_both_non_null() {
        let points = set();
        assert!(CandidateEdge::between(&points, 0, 1).same_part());
        assert!(!CandidateEdge::between(&points, 0, 2).same_part());
    }

    #[test]
    fn other_returns_opposite_endpoint() {
        let edge = CandidateEdge::between(&set(), 0, 1);
        assert_eq!(edge.other(0), 1);
        assert_eq!(edge.other(1), 0);
    }
}
