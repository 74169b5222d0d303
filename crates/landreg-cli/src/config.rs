//! CLI configuration
//!
//! Sources, lowest precedence first: built-in defaults, the TOML file given
//! with `--config`, the `LANDREG_DB` environment variable (a `.env` file in
//! the working directory is loaded first), the `--db` flag.

use std::path::{Path, PathBuf};

use anyhow::Context;
use landreg_core::logging_facility::Profile;
use landreg_core::ServiceOptions;
use serde::Deserialize;

pub const DEFAULT_DB_PATH: &str = ".landreg/registry.db";
pub const DB_ENV: &str = "LANDREG_DB";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub database_path: Option<PathBuf>,
    pub log_profile: Profile,
    pub service: ServiceOptions,
}

impl Config {
    /// Read the config file if one was given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Database path after applying the environment and flag overrides
    pub fn database_path(&self, flag: Option<PathBuf>, env: Option<String>) -> PathBuf {
        flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| self.database_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH))
    }
}
