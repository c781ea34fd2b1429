use crate::{
    DataGenerator, Dataset, DeviationVectors, EventSink, FitEvaluator, FitMetrics,
    GeneratorParams, MomentEstimator, MomentSummary, NoopSink, RegressionErr, RegressionModel,
    RegressionSolver, Result, SolverConfig, Stage, events::timed, pipeline::Analysis,
};

/// Step by step driver over the regression stages.
///
/// Every stage stores its output in its own slot and the next stage reads it from there, so the
/// calls must follow the order generate (or load), moments, deviations, solve, evaluate.
/// Calling a stage whose prerequisite slot is empty fails with `SequenceError`.
pub struct Analyzer<S: EventSink = NoopSink> {
    generator: DataGenerator,
    estimator: MomentEstimator,
    solver: RegressionSolver,
    evaluator: FitEvaluator,
    sink: S,

    dataset: Option<Dataset>,
    moments: Option<MomentSummary>,
    deviations: Option<DeviationVectors>,
    model: Option<RegressionModel>,
    metrics: Option<FitMetrics>,
}

impl Analyzer<NoopSink> {
    /// Creates an analyzer that discards its stage events.
    pub fn silent(config: &SolverConfig) -> Self {
        Self::new(config, NoopSink)
    }
}

impl<S: EventSink> Analyzer<S> {
    pub fn new(config: &SolverConfig, sink: S) -> Self {
        Self {
            generator: DataGenerator::new(),
            estimator: MomentEstimator::new(config),
            solver: RegressionSolver::new(config),
            evaluator: FitEvaluator::new(config),
            sink,
            dataset: None,
            moments: None,
            deviations: None,
            model: None,
            metrics: None,
        }
    }

    /// Draws a new dataset and forgets every output derived from the previous one.
    pub fn generate(&mut self, params: &GeneratorParams) -> Result<&Dataset> {
        let generator = self.generator;
        let dataset = timed(&mut self.sink, Stage::Generate, params.sample_size, || {
            generator.generate(params)
        })?;

        Ok(self.load(dataset))
    }

    /// Replaces the dataset and forgets every output derived from the previous one.
    pub fn load(&mut self, dataset: Dataset) -> &Dataset {
        self.moments = None;
        self.deviations = None;
        self.model = None;
        self.metrics = None;

        self.dataset.insert(dataset)
    }

    pub fn moments(&mut self) -> Result<MomentSummary> {
        let dataset = self.dataset.as_ref().ok_or(RegressionErr::SequenceError {
            stage: Stage::Moments,
            requires: Stage::Generate,
        })?;

        let estimator = self.estimator;
        let moments = timed(&mut self.sink, Stage::Moments, dataset.len(), || {
            estimator.means(dataset)
        })?;

        self.moments = Some(moments);
        Ok(moments)
    }

    pub fn deviations(&mut self) -> Result<&DeviationVectors> {
        let (Some(dataset), Some(moments)) = (self.dataset.as_ref(), self.moments) else {
            return Err(RegressionErr::SequenceError {
                stage: Stage::Deviations,
                requires: Stage::Moments,
            });
        };

        let estimator = self.estimator;
        let deviations = timed(&mut self.sink, Stage::Deviations, dataset.len(), || {
            Ok(estimator.deviations(dataset, &moments))
        })?;

        Ok(&*self.deviations.insert(deviations))
    }

    pub fn solve(&mut self) -> Result<RegressionModel> {
        let deviations = self.deviations.as_ref().ok_or(RegressionErr::SequenceError {
            stage: Stage::Solve,
            requires: Stage::Deviations,
        })?;

        let solver = self.solver;
        let model = timed(&mut self.sink, Stage::Solve, deviations.len(), || {
            solver.fit(deviations)
        })?;

        self.model = Some(model);
        Ok(model)
    }

    pub fn evaluate(&mut self) -> Result<FitMetrics> {
        let (Some(dataset), Some(model)) = (self.dataset.as_ref(), self.model) else {
            return Err(RegressionErr::SequenceError {
                stage: Stage::Evaluate,
                requires: Stage::Solve,
            });
        };

        let evaluator = self.evaluator;
        let metrics = timed(&mut self.sink, Stage::Evaluate, dataset.len(), || {
            evaluator.evaluate(dataset, &model)
        })?;

        self.metrics = Some(metrics);
        Ok(metrics)
    }

    /// Bundles the outputs of every stage.
    ///
    /// # Errors
    /// `SequenceError` unless `evaluate` has succeeded on the current dataset.
    pub fn analysis(&self) -> Result<Analysis> {
        match (&self.dataset, self.moments, self.model, self.metrics) {
            (Some(dataset), Some(moments), Some(model), Some(metrics)) => {
                Ok(Analysis::new(dataset.len(), moments, model, metrics))
            }
            _ => Err(RegressionErr::SequenceError {
                stage: Stage::Report,
                requires: Stage::Evaluate,
            }),
        }
    }

    /// Runs every stage after data acquisition, in order.
    pub fn run_all(&mut self) -> Result<Analysis> {
        self.moments()?;
        self.deviations()?;
        self.solve()?;
        self.evaluate()?;
        self.analysis()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
