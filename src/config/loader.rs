//! Config file loading

use crate::domain::Config;
use crate::error::Error;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Section name accepted for configs nested inside a larger file.
const SECTION: &str = "wlen";

const CANDIDATES: [&str; 6] =
    ["wlen.toml", ".wlen.toml", "wlen.yml", ".wlen.yml", "wlen.yaml", ".wlen.yaml"];

/// Load config from `config_path`, or discover one in `anchor_dir`.
///
/// An explicitly provided file must parse. An auto-discovered file that fails
/// to parse is logged and replaced by defaults.
pub fn load_config(anchor_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(anchor_dir),
    };

    let Some(config_file) = discovered else {
        tracing::debug!("No config file found under {}", anchor_dir.display());
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(Error::Config {
            path: config_file.clone(),
            message: format!("unsupported extension '.{other}'"),
        }
        .into()),
    };

    match parsed.and_then(|cfg| validate_config(cfg, &config_file)) {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

/// Reject values that deserialize but cannot be enforced.
fn validate_config(config: Config, config_file: &Path) -> Result<Config> {
    if config.limit == Some(0) {
        return Err(Error::InvalidLimit("0".to_string()))
            .with_context(|| format!("Invalid config: {}", config_file.display()));
    }
    Ok(config)
}

/// Parse TOML config, supporting a nested `[wlen]` section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested `wlen:` section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty YAML document parses as null
    if raw.is_null() {
        return Ok(Config::default());
    }

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(anchor_dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| anchor_dir.join(candidate)).find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_load_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("wlen.toml"), "limit = 140\nprecision = 1\nformat = 'json'\n")
            .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.limit, Some(140));
        assert_eq!(cfg.precision, 1);
        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(cfg.trim_trailing_newline);
    }

    #[test]
    fn test_load_nested_toml_section() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("settings.toml");
        fs::write(&path, "[wlen]\nlimit = 50\ntrim_trailing_newline = false\n").expect("write");

        let cfg = load_config(tmp.path(), Some(&path)).expect("config");
        assert_eq!(cfg.limit, Some(50));
        assert!(!cfg.trim_trailing_newline);
    }

    #[test]
    fn test_load_yaml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".wlen.yml"), "wlen:\n  limit: 280\n  encoding: shift_jis\n")
            .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.limit, Some(280));
        assert_eq!(cfg.encoding.as_deref(), Some("shift_jis"));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("wlen.yaml");
        fs::write(&path, "").expect("write");

        let cfg = load_config(tmp.path(), Some(&path)).expect("config");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_toml_preferred_over_yaml() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("wlen.toml"), "limit = 1\n").expect("write");
        fs::write(tmp.path().join("wlen.yml"), "limit: 2\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.limit, Some(1));
    }

    #[test]
    fn test_explicit_config_invalid_type_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "limit = \"lots\"\n").expect("write");

        let result = load_config(tmp.path(), Some(&path));
        assert!(result.is_err(), "explicit config with invalid type should return Err");
    }

    #[test]
    fn test_explicit_config_negative_limit_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "limit = -5\n").expect("write");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_zero_limit_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("wlen.toml");
        fs::write(&path, "limit = 0\n").expect("write");

        let err = load_config(tmp.path(), Some(&path)).unwrap_err();
        assert!(matches!(err.root_cause().downcast_ref::<Error>(), Some(Error::InvalidLimit(_))));
    }

    #[test]
    fn test_auto_discovered_zero_limit_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".wlen.yml"), "limit: 0\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("should not error on auto-discovery");
        assert_eq!(cfg.limit, None);
    }

    #[test]
    fn test_explicit_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("wlen.ini");
        fs::write(&path, "limit=1\n").expect("write");

        let err = load_config(tmp.path(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("unsupported extension '.ini'"));
    }

    #[test]
    fn test_explicit_missing_file_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("nope.toml");
        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_auto_discovered_invalid_config_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("wlen.toml"), "precision = [1, 2]\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("should not error on auto-discovery");
        assert_eq!(cfg, Config::default());
    }
}
