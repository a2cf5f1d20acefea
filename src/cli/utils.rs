//! Shared CLI utilities.

use anyhow::Result;

use crate::domain::OutputFormat;
use crate::error::Error;

/// Parse a `--limit` value: a positive whole number of units.
pub fn parse_limit(value: &str) -> std::result::Result<u64, Error> {
    match value.trim().parse::<u64>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(Error::InvalidLimit(value.to_string())),
    }
}

pub fn parse_format(format: Option<&str>) -> Result<Option<OutputFormat>> {
    let Some(format) = format else {
        return Ok(None);
    };
    match format.to_ascii_lowercase().as_str() {
        "text" | "txt" => Ok(Some(OutputFormat::Text)),
        "json" => Ok(Some(OutputFormat::Json)),
        invalid => anyhow::bail!("Invalid format '{invalid}'. Use: text|json"),
    }
}
