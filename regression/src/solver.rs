use ndarray::{Array1, ArrayView1};

use crate::{
    Dataset, DeviationVectors, MomentEstimator, RegressionErr, Result, SolverConfig,
    summation::Reducer,
};

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionModel {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionModel {
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn predictions(&self, x: ArrayView1<f64>) -> Array1<f64> {
        x.mapv(|x| self.predict(x))
    }

    /// Renders the model as `y = {slope}x + {intercept}` with six decimals.
    pub fn equation(&self) -> String {
        format!("y = {:.6}x + {:.6}", self.slope, self.intercept)
    }
}

/// Ordinary least squares for a single regressor.
#[derive(Debug, Clone, Copy)]
pub struct RegressionSolver {
    config: SolverConfig,
    reducer: Reducer,
}

impl RegressionSolver {
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            config: *config,
            reducer: config.reducer(),
        }
    }

    /// Computes `slope = <x_dev, y_dev> / <x_dev, x_dev>` and
    /// `intercept = mean_y - slope * mean_x`.
    ///
    /// # Errors
    /// * `EmptyDataset` if there are no deviations.
    /// * `DegenerateInput` if the spread of x is within rounding of `mean_x`, see
    ///   [`SolverConfig::relative_epsilon`].
    pub fn fit(&self, deviations: &DeviationVectors) -> Result<RegressionModel> {
        if deviations.is_empty() {
            return Err(RegressionErr::EmptyDataset);
        }

        let (x_dev, y_dev) = (deviations.x(), deviations.y());
        let moments = deviations.moments();

        let sxx = self.reducer.sum_squares(x_dev);
        if self.config.is_negligible(sxx, deviations.len(), moments.mean_x) {
            return Err(RegressionErr::DegenerateInput {
                what: "x has no spread beyond rounding, the slope is undefined",
            });
        }

        let sxy = self.reducer.dot(x_dev, y_dev);

        let slope = sxy / sxx;
        let intercept = moments.mean_y - slope * moments.mean_x;

        Ok(RegressionModel { slope, intercept })
    }

    /// Computes means and deviations of `dataset` and fits them.
    pub fn fit_dataset(&self, dataset: &Dataset) -> Result<RegressionModel> {
        let estimator = MomentEstimator::new(&self.config);
        let moments = estimator.means(dataset)?;
        let deviations = estimator.deviations(dataset, &moments);

        self.fit(&deviations)
    }
}

impl Default for RegressionSolver {
    fn default() -> Self {
        Self::new(&SolverConfig::default())
    }
}
