//! Project configuration.
//!
//! Read from `entigen.toml` at the project root when present. Every field
//! has a default, so the file is optional and may be partial.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional per-project config file.
pub const FILE_NAME: &str = "entigen.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory generated entity files are written to, resolved relative
    /// to the project root unless absolute.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("src/entities"),
        }
    }
}

impl Config {
    /// Load the config from `root`, falling back to defaults when the file
    /// is missing.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_dir, PathBuf::from("src/entities"));
    }

    #[test]
    fn test_load_reads_output_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(FILE_NAME),
            "output_dir = \"lib/generated\"\n",
        )
        .unwrap();

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("lib/generated"));
    }

    #[test]
    fn test_load_ignores_unknown_keys() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(FILE_NAME),
            "output_dir = \"lib/out\"\nfuture_knob = true\nowner = \"platform\"\n",
        )
        .unwrap();

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("lib/out"));
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(FILE_NAME), "").unwrap();

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(FILE_NAME), "output_dir = [not toml").unwrap();

        let err = Config::load(temp.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
