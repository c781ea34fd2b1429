mod analyzer;
mod config;
mod dataset;
mod error;
mod evaluation;
mod events;
mod generation;
mod moments;
mod pipeline;
mod solver;
pub mod summation;

pub use analyzer::Analyzer;
pub use config::SolverConfig;
pub use dataset::Dataset;
pub use error::{RegressionErr, Result};
pub use evaluation::{FitEvaluator, FitMetrics, Interpretation, insights};
pub use events::{EventSink, FnSink, NoopSink, Stage, StageEvent};
pub use generation::{DataGenerator, GeneratorParams, generate};
pub use moments::{DeviationVectors, MomentEstimator, MomentSummary};
pub use pipeline::{Analysis, Pipeline, analyze, run};
pub use solver::{RegressionModel, RegressionSolver};
