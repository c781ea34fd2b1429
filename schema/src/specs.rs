use serde::{Deserialize, Serialize};

pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;
pub const DEFAULT_TRUE_SLOPE: f64 = 0.6;
pub const DEFAULT_TRUE_INTERCEPT: f64 = 0.3;
pub const DEFAULT_NOISE_RANGE: f64 = 0.3;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;
/// A few ulps: the rounding a mean and a subtraction can leave in the deviations of a constant axis.
pub const DEFAULT_RELATIVE_EPSILON: f64 = 4.0 * f64::EPSILON;

/// The specification for the synthetic data generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSpec {
    pub sample_size: usize,
    pub true_slope: f64,
    pub true_intercept: f64,
    /// Half-width of the symmetric uniform noise band.
    pub noise_range: f64,
    pub seed: Option<u64>,
}

impl Default for GeneratorSpec {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            true_slope: DEFAULT_TRUE_SLOPE,
            true_intercept: DEFAULT_TRUE_INTERCEPT,
            noise_range: DEFAULT_NOISE_RANGE,
            seed: None,
        }
    }
}

/// The specification for the numerical behaviour of the solver and evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverSpec {
    /// An axis whose root mean squared deviation is at or below `relative_epsilon * |mean|` has
    /// no spread.
    pub relative_epsilon: f64,
    /// Minimum amount of points before reductions run on the thread pool.
    pub parallel_threshold: usize,
}

impl Default for SolverSpec {
    fn default() -> Self {
        Self {
            relative_epsilon: DEFAULT_RELATIVE_EPSILON,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// The specification for a complete analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSpec {
    pub generator: GeneratorSpec,
    pub solver: SolverSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let spec: AnalysisSpec =
            serde_json::from_str(r#"{ "generator": { "seed": 7 } }"#).unwrap();

        assert_eq!(spec.generator.seed, Some(7));
        assert_eq!(spec.generator.sample_size, DEFAULT_SAMPLE_SIZE);
        assert_eq!(spec.generator.true_slope, DEFAULT_TRUE_SLOPE);
        assert_eq!(spec.solver, SolverSpec::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res = serde_json::from_str::<AnalysisSpec>(r#"{ "generator": { "samples": 3 } }"#);
        assert!(res.is_err());
    }
}
