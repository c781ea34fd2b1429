use std::{
    fmt::{self, Display},
    sync::mpsc::Sender,
    time::{Duration, Instant, SystemTime},
};

use crate::Result;

/// A step of the analysis pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Generate,
    Moments,
    Deviations,
    Solve,
    Evaluate,
    /// Bundling of every output into an `Analysis`, it emits no event.
    Report,
}

impl Stage {
    /// Returns the stable, lowercase name of the stage.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Generate => "generate",
            Stage::Moments => "moments",
            Stage::Deviations => "deviations",
            Stage::Solve => "solve",
            Stage::Evaluate => "evaluate",
            Stage::Report => "report",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Emitted once a stage has completed successfully.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageEvent {
    pub stage: Stage,
    /// Wall clock time at which the stage started.
    pub started_at: SystemTime,
    pub duration: Duration,
    /// Amount of points the stage processed.
    pub points: usize,
}

/// Receives stage transition events.
///
/// The engine never logs or prints on its own, whoever drives it decides what an event means.
pub trait EventSink {
    fn emit(&mut self, event: StageEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&mut self, _event: StageEvent) {}
}

impl EventSink for Vec<StageEvent> {
    fn emit(&mut self, event: StageEvent) {
        self.push(event);
    }
}

impl EventSink for Sender<StageEvent> {
    fn emit(&mut self, event: StageEvent) {
        // A hung up receiver only means nobody is listening anymore.
        let _ = self.send(event);
    }
}

/// Adapts a closure into an `EventSink`.
pub struct FnSink<F>(pub F);

impl<F: FnMut(&StageEvent)> EventSink for FnSink<F> {
    fn emit(&mut self, event: StageEvent) {
        (self.0)(&event);
    }
}

/// Runs `f` as `stage` and reports it to `sink` if it succeeds.
pub(crate) fn timed<T, S, F>(sink: &mut S, stage: Stage, points: usize, f: F) -> Result<T>
where
    S: EventSink + ?Sized,
    F: FnOnce() -> Result<T>,
{
    let started_at = SystemTime::now();
    let start = Instant::now();
    let out = f()?;

    sink.emit(StageEvent {
        stage,
        started_at,
        duration: start.elapsed(),
        points,
    });

    Ok(out)
}
