//! Count command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use super::utils::{parse_format, parse_limit};
use crate::config::{apply_env_overrides, load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{Config, LengthReport, OutputFormat};
use crate::render::{render_json, render_text, write_report};
use crate::utils::encoding::{decode_bytes, DEFAULT_SAMPLE_SIZE};
use crate::utils::{is_binary_file, read_text_file, source_label, strip_trailing_newline};

#[derive(Args)]
pub struct InputArgs {
    /// Files to measure (reads stdin when no files and no --text are given)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Measure this text instead of files or stdin
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Path to config file (wlen.toml or .wlen.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum effective length
    #[arg(short, long, value_name = "UNITS", value_parser = parse_limit)]
    pub limit: Option<u64>,

    /// Decimals shown in text output
    #[arg(short, long, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Output format: text|json
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Input encoding label (e.g. shift_jis); detected when omitted
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Count a trailing newline in files and stdin
    #[arg(long)]
    pub keep_newline: bool,

    /// Also write the JSON report to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

pub fn run(args: InputArgs) -> Result<()> {
    let (config, reports) = measure(&args)?;
    emit(&args, &config, &reports)
}

/// Resolve config and measure every input source, in input order.
pub fn measure(args: &InputArgs) -> Result<(Config, Vec<LengthReport>)> {
    if args.text.is_some() && !args.files.is_empty() {
        anyhow::bail!("Cannot specify both FILES and --text");
    }

    let config = resolve_config(args)?;
    tracing::debug!(?config, "Resolved config");

    let reports = if let Some(text) = args.text.as_deref() {
        vec![LengthReport::new("text", text, config.limit)]
    } else if args.files.is_empty() {
        vec![read_stdin(&config)?]
    } else {
        read_files(&args.files, &config)?
    };

    Ok((config, reports))
}

/// Print reports in the configured format and write the optional report file.
pub fn emit(args: &InputArgs, config: &Config, reports: &[LengthReport]) -> Result<()> {
    match config.format {
        OutputFormat::Text => print!("{}", render_text(reports, config.precision)),
        OutputFormat::Json => print!("{}", render_json(reports)?),
    }

    if let Some(path) = args.report.as_deref() {
        write_report(path, reports)?;
    }
    Ok(())
}

fn resolve_config(args: &InputArgs) -> Result<Config> {
    let anchor = std::env::current_dir()?;
    let file_config = load_config(&anchor, args.config.as_deref())?;
    let env_config = apply_env_overrides(file_config, |key| std::env::var(key).ok());

    let cli_overrides = CliOverrides {
        limit: args.limit,
        precision: args.precision,
        format: parse_format(args.format.as_deref())?,
        encoding: args.encoding.clone(),
        trim_trailing_newline: if args.keep_newline { Some(false) } else { None },
    };

    Ok(merge_cli_with_config(env_config, cli_overrides))
}

fn read_stdin(config: &Config) -> Result<LengthReport> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("info: reading from stdin; press Ctrl-D to finish");
    }
    let mut bytes = Vec::new();
    stdin.read_to_end(&mut bytes).context("Failed reading stdin")?;

    let (content, encoding) = decode_bytes(&bytes, config.encoding.as_deref())?;
    tracing::debug!("Decoded stdin as {}", encoding);
    Ok(report_for("stdin", &content, config))
}

fn read_files(files: &[PathBuf], config: &Config) -> Result<Vec<LengthReport>> {
    let results: Vec<Option<LengthReport>> =
        files.par_iter().map(|path| read_file(path, config)).collect::<Result<_>>()?;

    let reports: Vec<LengthReport> = results.into_iter().flatten().collect();
    if reports.is_empty() {
        anyhow::bail!("No text inputs to measure");
    }
    Ok(reports)
}

fn read_file(path: &Path, config: &Config) -> Result<Option<LengthReport>> {
    if !path.is_file() {
        anyhow::bail!("Not a file: {}", path.display());
    }
    if is_binary_file(path, DEFAULT_SAMPLE_SIZE)? {
        tracing::warn!("Skipping binary file: {}", path.display());
        return Ok(None);
    }

    let (content, encoding) = read_text_file(path, config.encoding.as_deref())?;
    tracing::debug!("Read {} as {}", path.display(), encoding);
    Ok(Some(report_for(source_label(path), &content, config)))
}

fn report_for(source: impl Into<String>, content: &str, config: &Config) -> LengthReport {
    let text = if config.trim_trailing_newline { strip_trailing_newline(content) } else { content };
    LengthReport::new(source, text, config.limit)
}
