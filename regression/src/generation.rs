use ndarray::Array1;
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Uniform};
use schema::specs::GeneratorSpec;

use crate::{Dataset, RegressionErr, Result};

/// Parameters of the linear model the synthetic points are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorParams {
    pub sample_size: usize,
    pub true_slope: f64,
    pub true_intercept: f64,
    /// Noise is drawn uniformly from `[-noise_range, noise_range)`.
    pub noise_range: f64,
    /// Makes the generated sequence reproducible.
    pub seed: Option<u64>,
}

impl GeneratorParams {
    fn validate(&self) -> Result<()> {
        if self.sample_size < Dataset::MIN_LEN {
            return Err(RegressionErr::invalid(
                "sample_size",
                format!(
                    "must be at least {}, got {}",
                    Dataset::MIN_LEN,
                    self.sample_size
                ),
            ));
        }

        if !self.noise_range.is_finite() || self.noise_range < 0.0 {
            return Err(RegressionErr::invalid(
                "noise_range",
                format!("must be finite and >= 0, got {}", self.noise_range),
            ));
        }

        if !self.true_slope.is_finite() {
            return Err(RegressionErr::invalid("true_slope", "must be finite"));
        }

        if !self.true_intercept.is_finite() {
            return Err(RegressionErr::invalid("true_intercept", "must be finite"));
        }

        Ok(())
    }
}

impl Default for GeneratorParams {
    fn default() -> Self {
        GeneratorSpec::default().into()
    }
}

impl From<GeneratorSpec> for GeneratorParams {
    fn from(spec: GeneratorSpec) -> Self {
        Self {
            sample_size: spec.sample_size,
            true_slope: spec.true_slope,
            true_intercept: spec.true_intercept,
            noise_range: spec.noise_range,
            seed: spec.seed,
        }
    }
}

/// Produces synthetic datasets following `y = slope * x + intercept + noise`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataGenerator;

impl DataGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draws a new dataset.
    ///
    /// Every `x` is drawn from `U[0, 1)` first, then every noise term as `-r + 2r * U[0, 1)`.
    /// A fresh generator is created on each call, so a seeded call never observes the state
    /// left behind by another one.
    ///
    /// # Errors
    /// `InvalidParameter` if `sample_size < 2`, `noise_range` is negative or any value is not
    /// finite.
    pub fn generate(&self, params: &GeneratorParams) -> Result<Dataset> {
        params.validate()?;

        let GeneratorParams {
            sample_size: n,
            true_slope: slope,
            true_intercept: intercept,
            noise_range: r,
            seed,
        } = *params;

        let mut rng = self.generate_rng(seed);
        let unit = Uniform::<f64>::new(0.0, 1.0)?;

        let x = Array1::from_shape_fn(n, |_| unit.sample(&mut rng));
        let noise = Array1::from_shape_fn(n, |_| -r + 2.0 * r * unit.sample(&mut rng));
        let y = x.mapv(|x| slope * x + intercept) + &noise;

        Dataset::from_arrays(x, y)
    }

    fn generate_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Draws a synthetic dataset, see [`DataGenerator::generate`].
pub fn generate(
    sample_size: usize,
    true_slope: f64,
    true_intercept: f64,
    noise_range: f64,
    seed: Option<u64>,
) -> Result<Dataset> {
    DataGenerator::new().generate(&GeneratorParams {
        sample_size,
        true_slope,
        true_intercept,
        noise_range,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let a = generate(500, 0.6, 0.3, 0.3, Some(42)).unwrap();
        let b = generate(500, 0.6, 0.3, 0.3, Some(42)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate(100, 0.6, 0.3, 0.3, Some(1)).unwrap();
        let b = generate(100, 0.6, 0.3, 0.3, Some(2)).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn points_stay_within_the_noise_band() {
        let (slope, intercept, r) = (2.0, -1.0, 0.25);
        let ds = generate(2_000, slope, intercept, r, Some(7)).unwrap();

        for (x, y) in ds.points() {
            assert!((0.0..1.0).contains(&x), "x = {x}");
            let noise = y - (slope * x + intercept);
            assert!(noise >= -r - 1e-12 && noise < r + 1e-12, "noise = {noise}");
        }
    }

    #[test]
    fn zero_noise_lies_on_the_line() {
        let ds = generate(50, 0.6, 0.3, 0.0, Some(3)).unwrap();
        for (x, y) in ds.points() {
            assert!((y - (0.6 * x + 0.3)).abs() < 1e-15);
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        for (n, r) in [(0, 0.1), (1, 0.1), (10, -0.5), (10, f64::INFINITY)] {
            let err = generate(n, 1.0, 0.0, r, Some(0)).unwrap_err();
            assert!(
                matches!(err, RegressionErr::InvalidParameter { .. }),
                "n = {n}, r = {r}: {err}"
            );
        }
    }

    #[test]
    fn unseeded_generation_works() {
        let ds = generate(10, 1.0, 0.0, 0.1, None).unwrap();
        assert_eq!(ds.len(), 10);
    }
}
