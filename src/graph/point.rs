use crate::error::InputError;
use crate::math::{Point2, Point3};

/// Grouping label on input points (e.g. distinct survey lines).
///
/// Two points sharing a part are never connected directly.
pub type PartId = u32;

/// An immutable set of input points addressed by dense index.
///
/// The position of a point within the set is its caller-visible index;
/// trend lines refer back to these indices. Parts are per-point and
/// optional. Scalar values, when supplied, form a single array aligned
/// with the positions and are passed through to the output unchanged.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    positions: Vec<Point3>,
    parts: Vec<Option<PartId>>,
    values: Option<Vec<f64>>,
}

impl PointSet {
    /// Creates a point set from 3D positions, with no parts or values.
    #[must_use]
    pub fn new(positions: Vec<Point3>) -> Self {
        let parts = vec![None; positions.len()];
        Self {
            positions,
            parts,
            values: None,
        }
    }

    /// Creates a point set from 2D positions (z = 0).
    #[must_use]
    pub fn from_xy(positions: &[Point2]) -> Self {
        Self::new(
            positions
                .iter()
                .map(|p| Point3::new(p.x, p.y, 0.0))
                .collect(),
        )
    }

    /// Attaches per-point part identifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the array length does not match the point count.
    pub fn with_parts(mut self, parts: Vec<Option<PartId>>) -> Result<Self, InputError> {
        if parts.len() != self.positions.len() {
            return Err(InputError::LengthMismatch {
                array: "parts",
                actual: parts.len(),
                expected: self.positions.len(),
            });
        }
        self.parts = parts;
        Ok(self)
    }

    /// Attaches an aligned scalar value array.
    ///
    /// # Errors
    ///
    /// Returns an error if the array length does not match the point count.
    pub fn with_values(mut self, values: Vec<f64>) -> Result<Self, InputError> {
        if values.len() != self.positions.len() {
            return Err(InputError::LengthMismatch {
                array: "values",
                actual: values.len(),
                expected: self.positions.len(),
            });
        }
        self.values = Some(values);
        Ok(self)
    }

    /// Number of points in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the set contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All point positions, indexed by point index.
    #[must_use]
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// Position of the point at `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Point3 {
        self.positions[index]
    }

    /// Part identifier of the point at `index`, if any.
    #[must_use]
    pub fn part(&self, index: usize) -> Option<PartId> {
        self.parts[index]
    }

    /// The aligned scalar value array, if one was supplied.
    #[must_use]
    pub fn values(&self) -> Option<&[f64]> {
        self.values.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parts_length_mismatch_rejected() {
        let set = PointSet::new(vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)]);
        let err = set.with_parts(vec![Some(1)]).unwrap_err();
        assert!(matches!(
            err,
            InputError::LengthMismatch {
                array: "parts",
                actual: 1,
                expected: 2,
            }
        ));
    }

    #[test]
    fn values_length_mismatch_rejected() {
        let set = PointSet::new(vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)]);
        let err = set.with_values(vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            InputError::LengthMismatch {
                array: "values",
                ..
            }
        ));
    }

    #[test]
    fn accessors_roundtrip() {
        let set = PointSet::new(vec![Point3::origin(), Point3::new(1.0, 2.0, 3.0)])
            .with_parts(vec![None, Some(7)])
            .unwrap()
            .with_values(vec![0.5, 1.5])
            .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.position(1), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(set.part(0), None);
        assert_eq!(set.part(1), Some(7));
        assert_eq!(set.values(), Some(&[0.5, 1.5][..]));
    }

    #[test]
    fn from_xy_zeroes_elevation() {
        let set = PointSet::from_xy(&[Point2::new(2.0, 4.0)]);
        assert_eq!(set.position(0), Point3::new(2.0, 4.0, 0.0));
    }
}
