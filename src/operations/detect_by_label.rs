use crate::error::{InputError, Result};
use crate::graph::{PointSet, TrendLine};
use crate::params::DetectionParameters;

use super::detect::DetectTrendLines;

/// Trend lines detected for one label value of a grouped point set.
#[derive(Debug, Clone)]
pub struct LabeledLines {
    /// The label shared by every point feeding these lines.
    pub label: u32,
    /// Detected lines, with vertices remapped to original point indices.
    /// Edge indices stay local to the label's own pipeline run.
    pub lines: Vec<TrendLine>,
}

/// Runs detection separately for each label value of a grouped point set.
///
/// Points sharing a label form an independent detection problem; labels
/// are processed in ascending order with the same parameters. Label 0
/// marks ungrouped points and is skipped, as are labels with fewer than
/// two points. Labels yielding no lines are omitted from the output.
pub struct DetectByLabel {
    params: DetectionParameters,
}

impl DetectByLabel {
    /// Creates a new `DetectByLabel` operation.
    #[must_use]
    pub fn new(params: DetectionParameters) -> Self {
        Self { params }
    }

    /// Executes detection per label, returning groups in ascending label
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation, the label
    /// array length does not match the point count, or a point has a
    /// non-finite coordinate.
    pub fn execute(&self, points: &PointSet, labels: &[u32]) -> Result<Vec<LabeledLines>> {
        self.params.validate()?;
        if labels.len() != points.len() {
            return Err(InputError::LengthMismatch {
                array: "labels",
                actual: labels.len(),
                expected: points.len(),
            }
            .into());
        }

        let mut distinct: Vec<u32> = labels.iter().copied().filter(|&label| label != 0).collect();
        distinct.sort_unstable();
        distinct.dedup();

        let detect = DetectTrendLines::new(self.params.clone());
        let mut groups = Vec::new();

        for label in distinct {
            let indices: Vec<usize> = labels
                .iter()
                .enumerate()
                .filter_map(|(i, &l)| (l == label).then_some(i))
                .collect();
            if indices.len() < 2 {
                continue;
            }

            tracing::debug!(label, points = indices.len(), "detecting trend lines for label");
            let subset = subset_points(points, &indices)?;
            let lines = detect.execute(&subset)?;
            if lines.is_empty() {
                continue;
            }

            groups.push(LabeledLines {
                label,
                lines: lines
                    .into_iter()
                    .map(|line| remap_line(line, &indices))
                    .collect(),
            });
        }

        Ok(groups)
    }
}

/// Builds a point set from a subset of another, keeping parts and values.
fn subset_points(points: &PointSet, indices: &[usize]) -> Result<PointSet> {
    let positions = indices.iter().map(|&i| points.position(i)).collect();
    let parts = indices.iter().map(|&i| points.part(i)).collect();
    let mut subset = PointSet::new(positions).with_parts(parts)?;
    if let Some(values) = points.values() {
        subset = subset.with_values(indices.iter().map(|&i| values[i]).collect())?;
    }
    Ok(subset)
}

/// Rewrites a line's subset-local vertex indices back to original ones.
fn remap_line(line: TrendLine, indices: &[usize]) -> TrendLine {
    TrendLine {
        vertices: line.vertices.into_iter().map(|v| indices[v]).collect(),
        edges: line.edges,
        values: line.values,
    }
}
