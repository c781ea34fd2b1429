use schema::{report::AnalysisReport, specs::AnalysisSpec};

use crate::{
    DataGenerator, Dataset, EventSink, FitEvaluator, FitMetrics, GeneratorParams,
    MomentEstimator, MomentSummary, RegressionModel, RegressionSolver, Result, SolverConfig,
    Stage, evaluation::insights, events::timed,
};

/// Everything one analysis run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub sample_size: usize,
    pub moments: MomentSummary,
    pub model: RegressionModel,
    pub metrics: FitMetrics,
    pub insights: Vec<String>,
}

impl Analysis {
    pub(crate) fn new(
        sample_size: usize,
        moments: MomentSummary,
        model: RegressionModel,
        metrics: FitMetrics,
    ) -> Self {
        Self {
            sample_size,
            moments,
            model,
            insights: insights(&model, &metrics),
            metrics,
        }
    }

    /// Flattens the analysis into its serializable report.
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            sample_size: self.sample_size,
            mean_x: self.moments.mean_x,
            mean_y: self.moments.mean_y,
            slope: self.model.slope,
            intercept: self.model.intercept,
            equation_string: self.model.equation(),
            r_squared: self.metrics.r_squared,
            r_squared_percentage: self.metrics.r_squared_percentage(),
            sst: self.metrics.sst,
            ssr: self.metrics.ssr,
            interpretation: self.metrics.interpretation.into(),
            interpretation_detail: self.metrics.interpretation.description().to_string(),
            insights: self.insights.clone(),
        }
    }
}

/// Chains the estimator, solver and evaluator over one dataset.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pipeline {
    estimator: MomentEstimator,
    solver: RegressionSolver,
    evaluator: FitEvaluator,
}

impl Pipeline {
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            estimator: MomentEstimator::new(config),
            solver: RegressionSolver::new(config),
            evaluator: FitEvaluator::new(config),
        }
    }

    /// Runs moments, deviations, solve and evaluate in that order.
    ///
    /// One event per stage reaches `sink`. The first failing stage aborts the run and emits
    /// nothing for itself or any later stage.
    pub fn analyze<S>(&self, dataset: &Dataset, sink: &mut S) -> Result<Analysis>
    where
        S: EventSink + ?Sized,
    {
        let n = dataset.len();

        let moments = timed(sink, Stage::Moments, n, || self.estimator.means(dataset))?;
        let deviations = timed(sink, Stage::Deviations, n, || {
            Ok(self.estimator.deviations(dataset, &moments))
        })?;
        let model = timed(sink, Stage::Solve, n, || self.solver.fit(&deviations))?;
        let metrics = timed(sink, Stage::Evaluate, n, || {
            self.evaluator.evaluate(dataset, &model)
        })?;

        Ok(Analysis::new(n, moments, model, metrics))
    }
}

/// Analyzes an existing dataset, see [`Pipeline::analyze`].
pub fn analyze<S>(dataset: &Dataset, config: &SolverConfig, sink: &mut S) -> Result<Analysis>
where
    S: EventSink + ?Sized,
{
    Pipeline::new(config).analyze(dataset, sink)
}

/// Generates a dataset as described by `spec` and analyzes it.
///
/// # Errors
/// `InvalidParameter` for an out of domain generator or solver setting, `DegenerateInput` if the
/// generated data has no spread on either axis.
pub fn run<S>(spec: &AnalysisSpec, sink: &mut S) -> Result<(Dataset, Analysis)>
where
    S: EventSink + ?Sized,
{
    let config = SolverConfig::try_from(spec.solver)?;
    let params = GeneratorParams::from(spec.generator);

    let dataset = timed(sink, Stage::Generate, params.sample_size, || {
        DataGenerator::new().generate(&params)
    })?;
    let analysis = analyze(&dataset, &config, sink)?;

    Ok((dataset, analysis))
}
