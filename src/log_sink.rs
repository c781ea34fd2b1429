use std::time::UNIX_EPOCH;

use regression::{EventSink, StageEvent};
use schema::report::AnalysisReport;

/// Forwards every stage event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: StageEvent) {
        let started_at_ms = event
            .started_at
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64);
        let duration_us = event.duration.as_micros() as u64;

        log::info!(
            stage = event.stage.name(),
            points = event.points,
            duration_us = duration_us,
            started_at_ms = started_at_ms;
            "{} stage finished: {} points in {:?}",
            event.stage,
            event.points,
            event.duration
        );
    }
}

/// Logs the values each stage computed.
pub fn log_results(report: &AnalysisReport) {
    log::info!(
        mean_x = report.mean_x,
        mean_y = report.mean_y;
        "means: x = {:.6}, y = {:.6}",
        report.mean_x,
        report.mean_y
    );
    log::info!(
        slope = report.slope,
        intercept = report.intercept;
        "fitted {}",
        report.equation_string
    );
    log::info!(
        r_squared = report.r_squared,
        sst = report.sst,
        ssr = report.ssr;
        "R² = {:.6} ({})",
        report.r_squared,
        report.interpretation_detail
    );
}
