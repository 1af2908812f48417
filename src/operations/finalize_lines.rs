use crate::graph::{PointSet, TrendLine};

use super::assemble_paths::AssembledPath;

/// Packages assembled paths as trend lines, discarding those below the
/// minimum edge count.
///
/// Discarded paths are simply omitted; their edges are not reassigned to
/// other lines. Retained lines keep the assembler's insertion order. When
/// the point set carries scalar values, each line receives the value
/// sequence aligned to its vertices.
pub struct FinalizeLines<'a> {
    points: &'a PointSet,
    min_edges: usize,
}

impl<'a> FinalizeLines<'a> {
    /// Creates a new `FinalizeLines` operation.
    #[must_use]
    pub fn new(points: &'a PointSet, min_edges: usize) -> Self {
        Self { points, min_edges }
    }

    /// Executes finalization, consuming the assembled paths.
    #[must_use]
    pub fn execute(&self, paths: Vec<AssembledPath>) -> Vec<TrendLine> {
        paths
            .into_iter()
            .filter(|path| path.edges.len() >= self.min_edges)
            .map(|path| {
                let values = self
                    .points
                    .values()
                    .map(|values| path.vertices.iter().map(|&v| values[v]).collect());
                TrendLine {
                    vertices: path.vertices,
                    edges: path.edges,
                    values,
                }
            })
            .collect()
    }
}
