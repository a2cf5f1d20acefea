use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    weighted_length::cli::run()
}
