//! Output rendering (text lines, JSON reports)

pub mod report;
pub mod text;

pub use report::{render_json, write_report, REPORT_SCHEMA_VERSION};
pub use text::render_text;

/// Format `value` with at most `precision` decimals, trailing zeros trimmed.
pub fn format_units(value: f64, precision: usize) -> String {
    let mut out = format!("{:.*}", precision, value);
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    if out == "-0" {
        out = "0".to_string();
    }
    out
}
