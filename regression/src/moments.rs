use ndarray::{Array1, ArrayView1};

use crate::{Dataset, RegressionErr, Result, SolverConfig, summation::Reducer};

/// Per-axis means of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentSummary {
    pub mean_x: f64,
    pub mean_y: f64,
}

/// Per-axis deviations from the means, together with the means they were taken from.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviationVectors {
    x: Array1<f64>,
    y: Array1<f64>,
    moments: MomentSummary,
}

impl DeviationVectors {
    /// Creates a new `DeviationVectors`.
    ///
    /// # Errors
    /// `SizeMismatch` if `x` and `y` differ in length.
    pub fn new(x: Array1<f64>, y: Array1<f64>, moments: MomentSummary) -> Result<Self> {
        if x.len() != y.len() {
            return Err(RegressionErr::SizeMismatch {
                a: "x deviations",
                b: "y deviations",
                got: y.len(),
                expected: x.len(),
            });
        }

        Ok(Self { x, y, moments })
    }

    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    pub fn moments(&self) -> MomentSummary {
        self.moments
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Computes means and deviations.
#[derive(Debug, Default, Clone, Copy)]
pub struct MomentEstimator {
    reducer: Reducer,
}

impl MomentEstimator {
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            reducer: config.reducer(),
        }
    }

    /// Arithmetic mean of `values`.
    ///
    /// # Errors
    /// `EmptyDataset` if `values` is empty.
    pub fn mean(&self, values: ArrayView1<f64>) -> Result<f64> {
        if values.is_empty() {
            return Err(RegressionErr::EmptyDataset);
        }

        Ok(self.reducer.sum(values) / values.len() as f64)
    }

    pub fn means(&self, dataset: &Dataset) -> Result<MomentSummary> {
        Ok(MomentSummary {
            mean_x: self.mean(dataset.x())?,
            mean_y: self.mean(dataset.y())?,
        })
    }

    /// Subtracts each axis mean from every value of that axis.
    pub fn deviations(&self, dataset: &Dataset, moments: &MomentSummary) -> DeviationVectors {
        let &MomentSummary { mean_x, mean_y } = moments;

        DeviationVectors {
            x: dataset.x().mapv(|x| x - mean_x),
            y: dataset.y().mapv(|y| y - mean_y),
            moments: *moments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn means_and_deviations() {
        let ds = Dataset::new(vec![1.0, 2.0, 3.0, 6.0], vec![2.0, 2.0, 5.0, 7.0]).unwrap();
        let estimator = MomentEstimator::default();

        let moments = estimator.means(&ds).unwrap();
        assert_eq!(moments, MomentSummary { mean_x: 3.0, mean_y: 4.0 });

        let dev = estimator.deviations(&ds, &moments);
        assert_eq!(dev.len(), 4);
        assert_eq!(dev.x().to_vec(), [-2.0, -1.0, 0.0, 3.0]);
        assert_eq!(dev.y().to_vec(), [-2.0, -2.0, 1.0, 3.0]);
        assert_eq!(dev.moments(), moments);
    }

    #[test]
    fn mean_of_nothing_is_an_error() {
        let empty = Array1::<f64>::zeros(0);
        let err = MomentEstimator::default().mean(empty.view()).unwrap_err();

        assert_eq!(err, RegressionErr::EmptyDataset);
    }

    #[test]
    fn rejects_unequal_deviation_lengths() {
        let moments = MomentSummary { mean_x: 0.0, mean_y: 0.0 };
        let err = DeviationVectors::new(Array1::zeros(3), Array1::zeros(2), moments).unwrap_err();

        assert!(matches!(err, RegressionErr::SizeMismatch { .. }));
    }
}
