use ndarray::{Array1, ArrayView1};

use crate::{RegressionErr, Result};

/// An immutable, ordered set of `(x, y)` points.
///
/// Invariants: both axes have the same length, there are at least [`Dataset::MIN_LEN`] points
/// and every value is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Fewest points for which a variance is defined.
    pub const MIN_LEN: usize = 2;

    /// Creates a new dataset from owned buffers.
    ///
    /// # Errors
    /// * `SizeMismatch` if `x` and `y` differ in length.
    /// * `EmptyDataset` if there are no points.
    /// * `InvalidParameter` if there is a single point or any value is NaN or infinite.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        Self::from_arrays(Array1::from(x), Array1::from(y))
    }

    /// Same as [`Dataset::new`] but takes `ndarray` vectors.
    pub fn from_arrays(x: Array1<f64>, y: Array1<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(RegressionErr::SizeMismatch {
                a: "x",
                b: "y",
                got: y.len(),
                expected: x.len(),
            });
        }

        if x.is_empty() {
            return Err(RegressionErr::EmptyDataset);
        }

        if x.len() < Self::MIN_LEN {
            return Err(RegressionErr::invalid(
                "dataset",
                format!("at least {} points are required, got {}", Self::MIN_LEN, x.len()),
            ));
        }

        if let Some(i) = x.iter().zip(&y).position(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(RegressionErr::invalid(
                "dataset",
                format!("point {i} is not finite: ({}, {})", x[i], y[i]),
            ));
        }

        Ok(Self { x, y })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`, a dataset holds at least [`Dataset::MIN_LEN`] points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[inline]
    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    #[inline]
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    /// Iterates the points in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_basic() {
        let ds = Dataset::new(vec![1.0, 2.0], vec![3.0, 5.0]).unwrap();

        assert_eq!(ds.len(), 2);
        assert!(!ds.is_empty());
        assert_eq!(ds.points().collect::<Vec<_>>(), [(1.0, 3.0), (2.0, 5.0)]);
    }

    #[test]
    fn rejects_mismatched_axes() {
        let err = Dataset::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            RegressionErr::SizeMismatch {
                got: 2,
                expected: 3,
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_and_single_point() {
        assert_eq!(
            Dataset::new(vec![], vec![]).unwrap_err(),
            RegressionErr::EmptyDataset
        );
        assert!(matches!(
            Dataset::new(vec![1.0], vec![1.0]).unwrap_err(),
            RegressionErr::InvalidParameter { .. }
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = Dataset::new(vec![0.0, 1.0, 2.0], vec![0.0, f64::NAN, 2.0]).unwrap_err();
        assert!(err.to_string().contains("point 1"), "got {err}");
    }
}
