//! Shared data types: configuration and length reports.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::weight::{estimate, WeightedLength};

/// Output format for CLI reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Resolved configuration after merging file, environment, and CLI layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum effective length; `None` disables limit checks.
    pub limit: Option<u64>,
    /// Decimals shown in text output.
    pub precision: usize,
    pub format: OutputFormat,
    /// Force an input encoding label (e.g. `shift_jis`) instead of detecting.
    pub encoding: Option<String>,
    /// Drop one trailing newline from file and stdin input.
    pub trim_trailing_newline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: None,
            precision: 2,
            format: OutputFormat::Text,
            encoding: None,
            trim_trailing_newline: true,
        }
    }
}

/// Effective length of one input source, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthReport {
    pub source: String,
    pub chars: u64,
    pub discounted: u64,
    pub normal: u64,
    pub weighted: f64,
    /// Terminal columns; informational only.
    pub display_width: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<f64>,
    pub over_limit: bool,
    #[serde(skip)]
    pub length: WeightedLength,
}

impl LengthReport {
    pub fn new(source: impl Into<String>, text: &str, limit: Option<u64>) -> Self {
        Self::from_length(source, estimate(text), text.width(), limit)
    }

    pub fn from_length(
        source: impl Into<String>,
        length: WeightedLength,
        display_width: usize,
        limit: Option<u64>,
    ) -> Self {
        Self {
            source: source.into(),
            chars: length.total(),
            discounted: length.discounted(),
            normal: length.normal(),
            weighted: length.as_f64(),
            display_width,
            limit,
            remaining: limit.map(|l| length.remaining(l)),
            over_limit: limit.is_some_and(|l| length.exceeds(l)),
            length,
        }
    }

    /// Combine several reports into a single `total` report.
    pub fn total(reports: &[LengthReport], limit: Option<u64>) -> Self {
        let length = reports.iter().map(|r| r.length).sum();
        let width = reports.iter().map(|r| r.display_width).sum();
        Self::from_length("total", length, width, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let cfg = Config::default();
        assert!(cfg.limit.is_none());
        assert_eq!(cfg.precision, 2);
        assert_eq!(cfg.format, OutputFormat::Text);
        assert!(cfg.trim_trailing_newline);
    }

    #[test]
    fn test_report_without_limit() {
        let report = LengthReport::new("inline", "A美B", None);
        assert_eq!(report.chars, 3);
        assert_eq!(report.discounted, 2);
        assert_eq!(report.normal, 1);
        assert_eq!(report.display_width, 4);
        assert!(report.remaining.is_none());
        assert!(!report.over_limit);
    }

    #[test]
    fn test_report_over_limit() {
        let report = LengthReport::new("inline", "こんにちは", Some(4));
        assert_eq!(report.weighted, 5.0);
        assert_eq!(report.remaining, Some(-1.0));
        assert!(report.over_limit);
    }

    #[test]
    fn test_report_at_limit_is_not_over() {
        let report = LengthReport::new("inline", "ABC123", Some(4));
        assert_eq!(report.remaining, Some(0.0));
        assert!(!report.over_limit);
    }

    #[test]
    fn test_total_is_exact() {
        let reports =
            vec![LengthReport::new("a", "a", Some(1)), LengthReport::new("b", "bc", Some(1))];
        let total = LengthReport::total(&reports, Some(2));
        assert_eq!(total.source, "total");
        assert_eq!(total.weighted, 2.0);
        assert!(!total.over_limit);
    }

    #[test]
    fn test_json_skips_internal_length() {
        let report = LengthReport::new("inline", "ab", None);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("length").is_none());
        assert!(value.get("limit").is_none());
        assert_eq!(value["chars"], 2);
    }
}
