//! Compensated, block-wise reductions.
//!
//! Every reduction splits its input into blocks of [`BLOCK_SIZE`] elements, sums each block with
//! Neumaier's compensated summation and then combines the block partials the same way. For `n`
//! terms `tᵢ` the computed sum `ŝ` satisfies
//!
//! ```text
//! |ŝ − Σ tᵢ| ≤ 2ε · Σ |tᵢ| + O(n ε²) · Σ |tᵢ|
//! ```
//!
//! where `ε` is the machine epsilon, so the error does not grow linearly with `n` as it does for
//! naive left-to-right summation (`(n − 1) ε · Σ |tᵢ|`).
//!
//! The block layout and the order in which partials are combined do not depend on whether the
//! blocks were reduced on the `rayon` pool, hence parallel and sequential reductions return
//! bit-identical results.

use std::ops::Range;

use ndarray::{ArrayView1, s};
use rayon::prelude::*;

/// Amount of elements reduced together before combining partials.
pub const BLOCK_SIZE: usize = 4096;

#[derive(Debug, Default, Clone, Copy)]
struct Neumaier {
    sum: f64,
    compensation: f64,
}

impl Neumaier {
    #[inline]
    fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    #[inline]
    fn total(self) -> f64 {
        self.sum + self.compensation
    }
}

/// Sums `values` with Neumaier compensated summation.
pub fn neumaier_sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut acc = Neumaier::default();
    values.into_iter().for_each(|v| acc.add(v));
    acc.total()
}

/// Runs reductions over `f64` vectors, on the thread pool once they are long enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reducer {
    parallel_threshold: usize,
}

impl Reducer {
    /// Creates a new `Reducer`.
    ///
    /// # Arguments
    /// * `parallel_threshold` - Minimum length at which blocks are reduced in parallel.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// A reducer that never uses the thread pool.
    pub fn sequential() -> Self {
        Self::new(usize::MAX)
    }

    pub fn is_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }

    /// Returns `Σ values[i]`.
    pub fn sum(&self, values: ArrayView1<f64>) -> f64 {
        self.reduce(values.len(), |r| {
            neumaier_sum(values.slice(s![r.start..r.end]).iter().copied())
        })
    }

    /// Returns `Σ a[i] * b[i]`.
    ///
    /// Both views must have the same length.
    pub fn dot(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "dot product of unequal lengths");

        let len = a.len().min(b.len());
        self.reduce(len, |r| {
            let a = a.slice(s![r.start..r.end]);
            let b = b.slice(s![r.start..r.end]);
            neumaier_sum(a.iter().zip(b.iter()).map(|(x, y)| x * y))
        })
    }

    /// Returns `Σ values[i]²`.
    pub fn sum_squares(&self, values: ArrayView1<f64>) -> f64 {
        self.dot(values, values)
    }

    fn reduce<F>(&self, len: usize, block: F) -> f64
    where
        F: Fn(Range<usize>) -> f64 + Sync,
    {
        let nblocks = len.div_ceil(BLOCK_SIZE);
        let range = |b: usize| b * BLOCK_SIZE..((b + 1) * BLOCK_SIZE).min(len);

        let partials: Vec<f64> = if self.is_parallel(len) {
            (0..nblocks).into_par_iter().map(|b| block(range(b))).collect()
        } else {
            (0..nblocks).map(|b| block(range(b))).collect()
        };

        neumaier_sum(partials)
    }
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new(schema::specs::DEFAULT_PARALLEL_THRESHOLD)
    }
}
