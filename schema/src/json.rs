use std::{fs, path::Path};

use crate::{Result, SchemaErr, report::AnalysisReport, specs::AnalysisSpec};

/// Loads an `AnalysisSpec` from a JSON file, missing fields fall back to their defaults.
///
/// # Errors
/// `SchemaErr::Io` if the file cannot be read, `SchemaErr::Json` if it is not a valid spec.
pub fn read_spec<P: AsRef<Path>>(path: P) -> Result<AnalysisSpec> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SchemaErr::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_spec(&content)
}

/// Parses an `AnalysisSpec` from a JSON document.
pub fn parse_spec(content: &str) -> Result<AnalysisSpec> {
    Ok(serde_json::from_str(content)?)
}

/// Renders a report as a pretty printed JSON document.
pub fn to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes a report as pretty printed JSON to `path`, replacing any previous content.
pub fn write_report<P: AsRef<Path>>(path: P, report: &AnalysisReport) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(report)?;

    fs::write(path, json).map_err(|source| SchemaErr::Io {
        path: path.to_path_buf(),
        source,
    })
}
