use crate::error::Result;
use crate::graph::{PointSet, TrendLine};
use crate::params::DetectionParameters;

use super::assemble_paths::AssemblePaths;
use super::filter_edges::FilterEdges;
use super::finalize_lines::FinalizeLines;
use super::triangulate::Triangulate;

/// Runs the full trend-line detection pipeline over a point set:
/// triangulate, filter, assemble, finalize.
///
/// The pipeline is a pure batch computation; the same input and
/// parameters always produce the same ordered output.
pub struct DetectTrendLines {
    params: DetectionParameters,
}

impl DetectTrendLines {
    /// Creates a new `DetectTrendLines` operation.
    #[must_use]
    pub fn new(params: DetectionParameters) -> Self {
        Self { params }
    }

    /// Executes the pipeline, returning trend lines in seed order.
    ///
    /// Degenerate inputs (fewer than 3 points, everything filtered out,
    /// all paths below the minimum edge count) produce an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation or a point has
    /// a non-finite coordinate. No partial results are emitted on
    /// failure.
    pub fn execute(&self, points: &PointSet) -> Result<Vec<TrendLine>> {
        self.params.validate()?;

        let candidates = Triangulate::new(points).execute()?;
        tracing::debug!(candidates = candidates.len(), "built connection graph");

        let filtered = FilterEdges::new(candidates, &self.params).execute();
        tracing::debug!(filtered = filtered.len(), "filtered candidate edges");

        let paths = AssemblePaths::new(points, &filtered, self.params.damping).execute();
        let lines = FinalizeLines::new(points, self.params.min_edges).execute(paths);
        tracing::info!(lines = lines.len(), "trend line detection complete");

        Ok(lines)
    }
}
