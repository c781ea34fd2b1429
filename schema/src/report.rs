use serde::{Deserialize, Serialize};

/// The qualitative fit label as it appears in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterpretationSpec {
    Poor,
    Weak,
    Moderate,
    Good,
    Excellent,
}

/// The flat result bundle of one analysis run.
///
/// Field names are part of the output contract: downstream tools parse the JSON document by
/// these exact keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub sample_size: usize,
    pub mean_x: f64,
    pub mean_y: f64,
    pub slope: f64,
    pub intercept: f64,
    pub equation_string: String,
    pub r_squared: f64,
    pub r_squared_percentage: f64,
    pub sst: f64,
    pub ssr: f64,
    pub interpretation: InterpretationSpec,
    pub interpretation_detail: String,
    pub insights: Vec<String>,
}
