//! Configuration module for the sablet CLI.
//!
//! Settings load from a `sable.toml` file (the current directory by
//! default, or the path given with `--config`), with command-line flags
//! taking precedence over file values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SabletError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "sable.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Token output configuration.
    #[serde(default)]
    pub tokens: TokensConfig,
}

/// Configuration for the `tokens` subcommand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Default output format: "text" or "json".
    #[serde(default = "default_format")]
    pub format: String,

    /// Include spans in text output.
    #[serde(default = "default_true")]
    pub spans: bool,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            tokens: TokensConfig::default(),
        }
    }
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            spans: true,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SabletError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&text).map_err(|e| SabletError::Config(format!("{}: {e}", path.display())))
    }

    /// Load from an explicit path, from `sable.toml` in the current
    /// directory if present, or fall back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = Path::new(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::load(local);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.tokens.format, "text");
        assert!(config.tokens.spans);
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
                verbose = true

                [tokens]
                format = "json"
                spans = false
            "#,
        )
        .unwrap();
        assert!(config.verbose);
        assert_eq!(config.tokens.format, "json");
        assert!(!config.tokens.spans);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config: Config = toml::from_str("verbose = true").unwrap();
        assert!(config.verbose);
        assert_eq!(config.tokens.format, "text");
    }

    #[test]
    fn test_load_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "[tokens]\nformat = \"json\"").unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.tokens.format, "json");
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = Config::load(Path::new("/no/such/sable.toml")).unwrap_err();
        assert!(matches!(err, SabletError::Config(_)));
    }

    #[test]
    fn test_load_malformed_file_is_config_error() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "this is {{ not toml").unwrap();
        let err = Config::load(tmp.path()).unwrap_err();
        assert!(matches!(err, SabletError::Config(_)));
    }

    #[test]
    fn test_discover_explicit_path() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "verbose = true").unwrap();
        let config = Config::discover(Some(tmp.path())).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(config, parsed);
    }
}
