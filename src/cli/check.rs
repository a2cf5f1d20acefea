//! Check command implementation

use anyhow::Result;
use std::process::ExitCode;

use super::count::{emit, measure, InputArgs};

pub fn run(args: InputArgs) -> Result<ExitCode> {
    let (config, reports) = measure(&args)?;
    let Some(limit) = config.limit else {
        anyhow::bail!(
            "No limit configured: pass --limit, set WLEN_LIMIT, or add `limit` to wlen.toml"
        );
    };

    emit(&args, &config, &reports)?;

    let over: Vec<&str> =
        reports.iter().filter(|r| r.over_limit).map(|r| r.source.as_str()).collect();
    if over.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    eprintln!(
        "error: {} of {} input(s) over the limit of {}: {}",
        over.len(),
        reports.len(),
        limit,
        over.join(", ")
    );
    Ok(ExitCode::FAILURE)
}
