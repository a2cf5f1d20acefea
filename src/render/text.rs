//! Plain-text report lines

use crate::domain::LengthReport;

use super::format_units;

/// One line per source, plus a `total` line when there is more than one.
///
/// The limit applies per source, so the `total` line carries no limit.
///
/// ```text
/// 3.33 / 140 (136.67 remaining)  post.txt
/// ```
pub fn render_text(reports: &[LengthReport], precision: usize) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&render_line(report, precision));
        out.push('\n');
    }
    if reports.len() > 1 {
        let total = LengthReport::total(reports, None);
        out.push_str(&render_line(&total, precision));
        out.push('\n');
    }
    out
}

fn render_line(report: &LengthReport, precision: usize) -> String {
    let weighted = format_units(report.weighted, precision);
    match (report.limit, report.remaining) {
        (Some(limit), Some(remaining)) if report.over_limit => format!(
            "{weighted} / {limit} ({} over)  {}",
            format_units(-remaining, precision),
            report.source
        ),
        (Some(limit), Some(remaining)) => format!(
            "{weighted} / {limit} ({} remaining)  {}",
            format_units(remaining, precision),
            report.source
        ),
        _ => format!("{weighted}  {}", report.source),
    }
}
