//! Environment and CLI override layers

use crate::domain::{Config, OutputFormat};

/// Values given on the command line. `None` leaves the lower layer untouched.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub limit: Option<u64>,
    pub precision: Option<usize>,
    pub format: Option<OutputFormat>,
    pub encoding: Option<String>,
    pub trim_trailing_newline: Option<bool>,
}

pub const ENV_LIMIT: &str = "WLEN_LIMIT";
pub const ENV_PRECISION: &str = "WLEN_PRECISION";
pub const ENV_FORMAT: &str = "WLEN_FORMAT";

/// Apply `WLEN_*` variables on top of `config`.
///
/// `lookup` is `std::env::var` in the binary; invalid values are logged and
/// skipped.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_LIMIT) {
        match raw.trim().parse::<u64>() {
            Ok(limit) if limit > 0 => config.limit = Some(limit),
            _ => tracing::warn!("Ignoring invalid {}={:?}", ENV_LIMIT, raw),
        }
    }

    if let Some(raw) = lookup(ENV_PRECISION) {
        match raw.trim().parse::<usize>() {
            Ok(precision) => config.precision = precision,
            Err(_) => tracing::warn!("Ignoring invalid {}={:?}", ENV_PRECISION, raw),
        }
    }

    if let Some(raw) = lookup(ENV_FORMAT) {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => config.format = OutputFormat::Text,
            "json" => config.format = OutputFormat::Json,
            _ => tracing::warn!("Ignoring invalid {}={:?}", ENV_FORMAT, raw),
        }
    }

    config
}

/// Apply CLI overrides on top of `config`.
pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(limit) = cli.limit {
        config.limit = Some(limit);
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(encoding) = cli.encoding {
        config.encoding = Some(encoding);
    }
    if let Some(trim) = cli.trim_trailing_newline {
        config.trim_trailing_newline = trim;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_file_values() {
        let file = Config { limit: Some(10), ..Config::default() };
        let cfg = apply_env_overrides(
            file,
            env(&[("WLEN_LIMIT", "280"), ("WLEN_PRECISION", "3"), ("WLEN_FORMAT", "JSON")]),
        );
        assert_eq!(cfg.limit, Some(280));
        assert_eq!(cfg.precision, 3);
        assert_eq!(cfg.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let file = Config { limit: Some(10), ..Config::default() };
        let cfg = apply_env_overrides(
            file.clone(),
            env(&[("WLEN_LIMIT", "0"), ("WLEN_PRECISION", "x"), ("WLEN_FORMAT", "xml")]),
        );
        assert_eq!(cfg, file);
    }

    #[test]
    fn test_cli_takes_precedence() {
        let base = apply_env_overrides(Config::default(), env(&[("WLEN_LIMIT", "280")]));
        let cfg = merge_cli_with_config(
            base,
            CliOverrides {
                limit: Some(140),
                trim_trailing_newline: Some(false),
                ..CliOverrides::default()
            },
        );
        assert_eq!(cfg.limit, Some(140));
        assert!(!cfg.trim_trailing_newline);
        assert_eq!(cfg.precision, 2);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let base = Config { encoding: Some("euc-jp".into()), ..Config::default() };
        assert_eq!(merge_cli_with_config(base.clone(), CliOverrides::default()), base);
    }
}
