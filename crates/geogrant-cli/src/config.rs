//! CLI configuration

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use geogrant_catalog::CatalogColumns;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Geography source used when neither flag nor config names one
pub const DEFAULT_CITIES_PATH: &str = "cities.csv";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Geography CSV file
    pub cities_path: Option<PathBuf>,

    /// Column positions within the geography CSV
    pub columns: CatalogColumns,

    /// Default output format
    pub output: Option<OutputFormat>,
}

impl CliConfig {
    /// Load configuration from file
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Geography source, preferring an explicit path
    pub fn cities_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.cities_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CITIES_PATH))
    }

    /// Output format, preferring an explicit choice
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.output).unwrap_or_default()
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("geogrant").join("config.toml"))
    }
}
