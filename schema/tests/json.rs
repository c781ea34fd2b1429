use std::{env, fs, process};

use schema::{
    SchemaErr,
    report::{AnalysisReport, InterpretationSpec},
    specs::AnalysisSpec,
};

fn report() -> AnalysisReport {
    AnalysisReport {
        sample_size: 2,
        mean_x: 0.5,
        mean_y: 0.6,
        slope: 0.6,
        intercept: 0.3,
        equation_string: "y = 0.600000x + 0.300000".into(),
        r_squared: 1.0,
        r_squared_percentage: 100.0,
        sst: 0.18,
        ssr: 0.0,
        interpretation: InterpretationSpec::Excellent,
        interpretation_detail: "Excellent fit - model explains most variance in the data".into(),
        insights: vec!["The relationship between X and Y is positive.".into()],
    }
}

#[test]
fn report_json_uses_contract_field_names() {
    let json = schema::to_json(&report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    for key in [
        "sample_size",
        "mean_x",
        "mean_y",
        "slope",
        "intercept",
        "equation_string",
        "r_squared",
        "r_squared_percentage",
        "sst",
        "ssr",
        "interpretation",
        "insights",
    ] {
        assert!(value.get(key).is_some(), "missing key {key} in {json}");
    }

    assert_eq!(value["interpretation"], "Excellent");
    assert_eq!(value["equation_string"], "y = 0.600000x + 0.300000");
}

#[test]
fn write_report_then_read_back() {
    let path = env::temp_dir().join(format!("schema-report-{}.json", process::id()));

    schema::write_report(&path, &report()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);

    let parsed: AnalysisReport = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, report());
}

#[test]
fn read_spec_reports_missing_file() {
    let path = env::temp_dir().join("schema-this-spec-does-not-exist.json");
    let err = schema::read_spec(&path).unwrap_err();

    assert!(matches!(err, SchemaErr::Io { .. }), "got {err}");
}

#[test]
fn empty_document_is_the_default_spec() {
    let spec = schema::parse_spec("{}").unwrap();
    assert_eq!(spec, AnalysisSpec::default());
}
