use std::collections::HashSet;

use spade::{DelaunayTriangulation, HasPosition, Point2 as SpadePoint2, Triangulation};

use crate::error::{InputError, Result};
use crate::graph::{CandidateEdge, PointSet};

/// Builds the candidate connection graph over a point set.
///
/// Candidates are the undirected edges of a Delaunay triangulation of the
/// points' 2D projections. A triangulation bounds the candidate count to
/// O(n) while guaranteeing every site at least one connection regardless
/// of local density. Fully collinear inputs degenerate to the chain of
/// hull edges between consecutive sites; fewer than 3 points yield no
/// candidates at all. Neither case is an error — both signal that few or
/// no trend lines are possible.
pub struct Triangulate<'a> {
    points: &'a PointSet,
}

/// A triangulation site carrying its original point index.
struct Site {
    position: SpadePoint2<f64>,
    index: usize,
}

impl HasPosition for Site {
    type Scalar = f64;

    fn position(&self) -> SpadePoint2<f64> {
        self.position
    }
}

impl<'a> Triangulate<'a> {
    /// Creates a new `Triangulate` operation over `points`.
    #[must_use]
    pub fn new(points: &'a PointSet) -> Self {
        Self { points }
    }

    /// Executes the triangulation, returning candidate edges sorted by
    /// their canonical `(start, end)` index pair.
    ///
    /// Points whose 2D projections coincide exactly are collapsed to the
    /// lowest point index before insertion, so every site enters the
    /// triangulation exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if a point has a non-finite x or y coordinate.
    pub fn execute(&self) -> Result<Vec<CandidateEdge>> {
        if self.points.len() < 3 {
            return Ok(Vec::new());
        }

        let mut sites: HashSet<(u64, u64)> = HashSet::new();
        let mut triangulation: DelaunayTriangulation<Site> = DelaunayTriangulation::new();

        for (index, p) in self.points.positions().iter().enumerate() {
            // `+ 0.0` folds -0.0 onto 0.0 so the key matches spade's
            // numeric site comparison.
            let key = ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits());
            if !sites.insert(key) {
                continue;
            }
            triangulation
                .insert(Site {
                    position: SpadePoint2::new(p.x, p.y),
                    index,
                })
                .map_err(|_| InputError::NonFiniteCoordinate(index))?;
        }

        let mut pairs: Vec<(usize, usize)> = triangulation
            .undirected_edges()
            .map(|edge| {
                let [a, b] = edge.vertices();
                let (i, j) = (a.data().index, b.data().index);
                if i < j {
                    (i, j)
                } else {
                    (j, i)
                }
            })
            .collect();
        pairs.sort_unstable();

        Ok(pairs
            .into_iter()
            .map(|(a, b)| CandidateEdge::between(self.points, a, b))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn endpoints(edges: &[CandidateEdge]) -> Vec<(usize, usize)> {
        edges.iter().map(|e| (e.start, e.end)).collect()
    }

    #[test]
    fn fewer_than_three_points_yield_nothing() {
        let set = PointSet::from_xy(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(Triangulate::new(&set).execute().unwrap().is_empty());
    }

    #[test]
    fn coincident_points_yield_nothing() {
        let set = PointSet::from_xy(&[
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 2.0),
        ]);
        assert!(Triangulate::new(&set).execute().unwrap().is_empty());
    }

    #[test]
    fn collinear_points_degenerate_to_chain() {
        let set = PointSet::from_xy(&[
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(20.0, 0.0),
            Point2::new(30.0, 0.0),
        ]);
        let edges = Triangulate::new(&set).execute().unwrap();
        assert_eq!(endpoints(&edges), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn triangle_yields_three_edges() {
        let set = PointSet::from_xy(&[
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 3.0),
        ]);
        let edges = Triangulate::new(&set).execute().unwrap();
        assert_eq!(endpoints(&edges), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn quad_yields_hull_plus_one_diagonal() {
        // Point 3 lies inside the circumcircle of (0, 1, 2), forcing the
        // (1, 3) diagonal.
        let set = PointSet::from_xy(&[
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(2.0, 2.5),
            Point2::new(0.0, 1.0),
        ]);
        let edges = Triangulate::new(&set).execute().unwrap();
        assert_eq!(
            endpoints(&edges),
            vec![(0, 1), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn duplicate_sites_collapse_to_lowest_index() {
        let set = PointSet::from_xy(&[
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 3.0),
        ]);
        let edges = Triangulate::new(&set).execute().unwrap();
        // Point 2 duplicates point 1 and disappears from the graph.
        assert_eq!(endpoints(&edges), vec![(0, 1), (0, 3), (1, 3)]);
    }

    #[test]
    fn non_finite_coordinate_is_fatal() {
        let set = PointSet::from_xy(&[
            Point2::new(0.0, 0.0),
            Point2::new(f64::NAN, 0.0),
            Point2::new(2.0, 3.0),
        ]);
        let err = Triangulate::new(&set).execute().unwrap_err();
        assert!(matches!(
            err,
            crate::error::TrendlineError::Input(InputError::NonFiniteCoordinate(1))
        ));
    }
}
