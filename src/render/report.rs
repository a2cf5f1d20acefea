//! Report JSON generation.

use crate::domain::LengthReport;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Build the JSON report: every source in input order plus a `total`.
///
/// The limit applies per source; `total` is an aggregate and has none.
pub fn build_report(reports: &[LengthReport]) -> Result<Value> {
    let total = LengthReport::total(reports, None);

    let mut report = Map::new();
    report.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.to_string()));
    report.insert("sources".to_string(), serde_json::to_value(reports)?);
    report.insert("total".to_string(), serde_json::to_value(&total)?);
    Ok(Value::Object(report))
}

pub fn render_json(reports: &[LengthReport]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&build_report(reports)?)?;
    out.push('\n');
    Ok(out)
}

/// Write the JSON report to `report_path`, creating parent directories.
pub fn write_report(report_path: &Path, reports: &[LengthReport]) -> Result<()> {
    if let Some(parent) = report_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(report_path, render_json(reports)?)
        .with_context(|| format!("Failed writing report: {}", report_path.display()))?;
    tracing::debug!("Wrote report to {}", report_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_shape() {
        let reports = vec![
            LengthReport::new("a", "ABC123", Some(5)),
            LengthReport::new("b", "こんにちは", Some(5)),
        ];
        let value = build_report(&reports).unwrap();

        assert_eq!(value["schema_version"], REPORT_SCHEMA_VERSION);
        let sources = value["sources"].as_array().unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0]["source"], "a");
        assert_eq!(sources[0]["weighted"], 4.0);
        assert_eq!(sources[0]["over_limit"], false);
        assert_eq!(sources[1]["remaining"], 0.0);

        assert_eq!(value["total"]["chars"], 11);
        assert_eq!(value["total"]["weighted"], 9.0);
        assert_eq!(value["total"]["over_limit"], false);
        assert!(value["total"].get("limit").is_none());
        assert!(value["total"].get("remaining").is_none());
    }

    #[test]
    fn test_no_limit_omits_fields() {
        let value = build_report(&[LengthReport::new("inline", "x", None)]).unwrap();
        assert!(value["total"].get("limit").is_none());
        assert!(value["total"].get("remaining").is_none());
    }

    #[test]
    fn test_write_report_creates_parents() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("out").join("report.json");
        write_report(&path, &[LengthReport::new("inline", "hello", None)]).unwrap();

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["sources"][0]["chars"], 5);
    }
}
