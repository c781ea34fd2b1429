use schema::specs::SolverSpec;

use crate::{RegressionErr, Result, summation::Reducer};

/// Immutable numerical settings shared by the estimator, solver and evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    relative_epsilon: f64,
    parallel_threshold: usize,
}

impl SolverConfig {
    /// Creates a new solver configuration.
    ///
    /// # Arguments
    /// * `relative_epsilon` - Relative threshold below which a sum of squared deviations counts as zero.
    /// * `parallel_threshold` - Minimum amount of points before reductions run in parallel.
    ///
    /// # Errors
    /// `RegressionErr::InvalidParameter` if `relative_epsilon` is negative or not finite.
    pub fn new(relative_epsilon: f64, parallel_threshold: usize) -> Result<Self> {
        if !relative_epsilon.is_finite() || relative_epsilon < 0.0 {
            return Err(RegressionErr::invalid(
                "relative_epsilon",
                format!("must be a finite, non-negative number, got {relative_epsilon}"),
            ));
        }

        Ok(Self {
            relative_epsilon,
            parallel_threshold,
        })
    }

    pub fn relative_epsilon(&self) -> f64 {
        self.relative_epsilon
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn reducer(&self) -> Reducer {
        Reducer::new(self.parallel_threshold)
    }

    /// Whether an axis has no spread beyond the rounding left by centering it.
    ///
    /// `squared_deviations` is `Σ (v - mean)²` over `len` values. Centering a constant axis
    /// leaves deviations of a few ulps of `mean`, so the axis counts as constant when its root
    /// mean squared deviation is at or below `relative_epsilon * |mean|`.
    pub(crate) fn is_negligible(&self, squared_deviations: f64, len: usize, mean: f64) -> bool {
        let rms = (squared_deviations / len.max(1) as f64).sqrt();
        rms <= self.relative_epsilon * mean.abs()
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        let spec = SolverSpec::default();
        Self {
            relative_epsilon: spec.relative_epsilon,
            parallel_threshold: spec.parallel_threshold,
        }
    }
}

impl TryFrom<SolverSpec> for SolverConfig {
    type Error = RegressionErr;

    fn try_from(spec: SolverSpec) -> Result<Self> {
        Self::new(spec.relative_epsilon, spec.parallel_threshold)
    }
}
