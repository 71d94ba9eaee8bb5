//! CLI error types

use geogrant_catalog::CatalogError;
use geogrant_registry::RegistryError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The geography catalog could not be built
    #[error("Geography catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Registry operation failed
    #[error("{0}")]
    Registry(#[from] RegistryError),

    /// Terminal prompt failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
