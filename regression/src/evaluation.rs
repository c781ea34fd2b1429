use std::fmt::{self, Display};

use schema::report::InterpretationSpec;

use crate::{
    Dataset, MomentEstimator, RegressionErr, RegressionModel, Result, SolverConfig,
    summation::Reducer,
};

/// Qualitative reading of an R² value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interpretation {
    Poor,
    Weak,
    Moderate,
    Good,
    Excellent,
}

impl Interpretation {
    /// Classifies an R² fraction using inclusive lower bounds 0.2, 0.4, 0.6 and 0.8.
    ///
    /// Negative values, a model worse than predicting the mean, are `Poor`.
    pub fn from_r_squared(r_squared: f64) -> Self {
        if r_squared >= 0.8 {
            Interpretation::Excellent
        } else if r_squared >= 0.6 {
            Interpretation::Good
        } else if r_squared >= 0.4 {
            Interpretation::Moderate
        } else if r_squared >= 0.2 {
            Interpretation::Weak
        } else {
            Interpretation::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::Poor => "Poor",
            Interpretation::Weak => "Weak",
            Interpretation::Moderate => "Moderate",
            Interpretation::Good => "Good",
            Interpretation::Excellent => "Excellent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Interpretation::Poor => "Poor fit - model explains very little variance in the data",
            Interpretation::Weak => "Weak fit - model explains limited variance in the data",
            Interpretation::Moderate => {
                "Moderate fit - model explains moderate variance in the data"
            }
            Interpretation::Good => "Good fit - model explains substantial variance in the data",
            Interpretation::Excellent => {
                "Excellent fit - model explains most variance in the data"
            }
        }
    }
}

impl Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Interpretation> for InterpretationSpec {
    fn from(value: Interpretation) -> Self {
        match value {
            Interpretation::Poor => InterpretationSpec::Poor,
            Interpretation::Weak => InterpretationSpec::Weak,
            Interpretation::Moderate => InterpretationSpec::Moderate,
            Interpretation::Good => InterpretationSpec::Good,
            Interpretation::Excellent => InterpretationSpec::Excellent,
        }
    }
}

/// Goodness of fit of a model over a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitMetrics {
    /// Total sum of squares, `Σ (y - mean_y)²`.
    pub sst: f64,
    /// Residual sum of squares, `Σ (y - ŷ)²`.
    pub ssr: f64,
    /// `1 - ssr / sst`, negative when the model is worse than the mean.
    pub r_squared: f64,
    pub interpretation: Interpretation,
}

impl FitMetrics {
    pub fn r_squared_percentage(&self) -> f64 {
        self.r_squared * 100.0
    }
}

/// Computes R² and its companions.
#[derive(Debug, Clone, Copy)]
pub struct FitEvaluator {
    config: SolverConfig,
    reducer: Reducer,
}

impl FitEvaluator {
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            config: *config,
            reducer: config.reducer(),
        }
    }

    /// Evaluates `model` against the observed points of `dataset`.
    ///
    /// # Errors
    /// `DegenerateInput` if the spread of y is within rounding of `mean_y`. R² is undefined then
    /// and no sentinel is returned in its place.
    pub fn evaluate(&self, dataset: &Dataset, model: &RegressionModel) -> Result<FitMetrics> {
        let y = dataset.y();
        let mean_y = MomentEstimator::new(&self.config).mean(y)?;

        let y_dev = y.mapv(|y| y - mean_y);
        let sst = self.reducer.sum_squares(y_dev.view());

        if self.config.is_negligible(sst, dataset.len(), mean_y) {
            return Err(RegressionErr::DegenerateInput {
                what: "y has no spread beyond rounding, R² is undefined",
            });
        }

        let residuals = &y - &model.predictions(dataset.x());
        let ssr = self.reducer.sum_squares(residuals.view());
        let r_squared = 1.0 - ssr / sst;

        Ok(FitMetrics {
            sst,
            ssr,
            r_squared,
            interpretation: Interpretation::from_r_squared(r_squared),
        })
    }
}

impl Default for FitEvaluator {
    fn default() -> Self {
        Self::new(&SolverConfig::default())
    }
}

/// Human readable findings: explained variance, direction and per-unit effect.
pub fn insights(model: &RegressionModel, metrics: &FitMetrics) -> Vec<String> {
    let direction = if model.slope > 0.0 {
        "The relationship between X and Y is positive."
    } else if model.slope < 0.0 {
        "The relationship between X and Y is negative."
    } else {
        "There is no linear relationship between X and Y."
    };

    let verb = if model.slope < 0.0 { "decreases" } else { "increases" };

    vec![
        format!(
            "The model explains {:.2}% of the variance in the dependent variable.",
            metrics.r_squared_percentage()
        ),
        direction.to_string(),
        format!(
            "For every unit increase in X, Y {verb} by approximately {:.4} units.",
            model.slope.abs()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpretation_bands_use_inclusive_lower_bounds() {
        use Interpretation::*;

        let cases = [
            (-3.0, Poor),
            (0.0, Poor),
            (0.199, Poor),
            (0.2, Weak),
            (0.399, Weak),
            (0.4, Moderate),
            (0.6, Good),
            (0.799, Good),
            (0.8, Excellent),
            (1.0, Excellent),
        ];

        for (r2, expected) in cases {
            assert_eq!(Interpretation::from_r_squared(r2), expected, "r2 = {r2}");
        }
    }

    #[test]
    fn perfect_fit() {
        let ds = Dataset::new(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0]).unwrap();
        let model = RegressionModel { slope: 2.0, intercept: 1.0 };
        let metrics = FitEvaluator::default().evaluate(&ds, &model).unwrap();

        assert_eq!(metrics.ssr, 0.0);
        assert_eq!(metrics.sst, 8.0);
        assert_eq!(metrics.r_squared, 1.0);
        assert_eq!(metrics.interpretation, Interpretation::Excellent);
    }

    #[test]
    fn worse_than_the_mean_is_negative_and_not_clamped() {
        let ds = Dataset::new(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0]).unwrap();
        let model = RegressionModel { slope: -2.0, intercept: 5.0 };
        let metrics = FitEvaluator::default().evaluate(&ds, &model).unwrap();

        // residuals: -4, 0, 4
        assert_eq!(metrics.ssr, 32.0);
        assert_eq!(metrics.r_squared, -3.0);
        assert_eq!(metrics.interpretation, Interpretation::Poor);
        assert_eq!(metrics.r_squared_percentage(), -300.0);
    }

    #[test]
    fn constant_y_is_degenerate() {
        let ds = Dataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![5.0; 4]).unwrap();
        let model = RegressionModel { slope: 0.0, intercept: 5.0 };
        let err = FitEvaluator::default().evaluate(&ds, &model).unwrap_err();

        assert!(matches!(err, RegressionErr::DegenerateInput { .. }), "got {err}");
    }

    #[test]
    fn small_spread_around_a_large_level_is_evaluated() {
        let x: Vec<f64> = (0..20).map(f64::from).collect();
        let y: Vec<f64> = (0..20).map(|i| 1e9 + f64::from(i % 3)).collect();
        let ds = Dataset::new(x, y).unwrap();

        let model = crate::RegressionSolver::default().fit_dataset(&ds).unwrap();
        let metrics = FitEvaluator::default().evaluate(&ds, &model).unwrap();

        assert!(metrics.sst > 0.0);
        assert!((0.0..=1.0).contains(&metrics.r_squared), "r2 = {}", metrics.r_squared);
    }

    #[test]
    fn wider_epsilon_treats_a_tight_y_as_constant() {
        let ds = Dataset::new(vec![0.0, 1.0, 2.0], vec![5.0, 5.0 + 1e-9, 5.0]).unwrap();
        let model = RegressionModel { slope: 0.0, intercept: 5.0 };
        assert!(FitEvaluator::default().evaluate(&ds, &model).is_ok());

        let coarse = SolverConfig::new(1e-6, usize::MAX).unwrap();
        let err = FitEvaluator::new(&coarse).evaluate(&ds, &model).unwrap_err();
        assert!(matches!(err, RegressionErr::DegenerateInput { .. }), "got {err}");
    }

    #[test]
    fn insight_wording() {
        let metrics = FitMetrics {
            sst: 1.0,
            ssr: 0.25,
            r_squared: 0.75,
            interpretation: Interpretation::Good,
        };

        let up = insights(&RegressionModel { slope: 0.6, intercept: 0.3 }, &metrics);
        assert_eq!(
            up,
            [
                "The model explains 75.00% of the variance in the dependent variable.",
                "The relationship between X and Y is positive.",
                "For every unit increase in X, Y increases by approximately 0.6000 units.",
            ]
        );

        let down = insights(&RegressionModel { slope: -1.5, intercept: 0.0 }, &metrics);
        assert_eq!(down[1], "The relationship between X and Y is negative.");
        assert_eq!(
            down[2],
            "For every unit increase in X, Y decreases by approximately 1.5000 units."
        );

        let flat = insights(&RegressionModel { slope: 0.0, intercept: 0.0 }, &metrics);
        assert_eq!(flat[1], "There is no linear relationship between X and Y.");
    }
}
