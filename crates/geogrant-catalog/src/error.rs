//! Catalog error types

use geogrant_types::{RegionKey, TypesError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors building the geography catalog
///
/// All of these are fatal: a session cannot start without a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Source file could not be opened
    #[error("cannot open geography source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding failed
    #[error("cannot read geography source: {0}")]
    Csv(#[from] csv::Error),

    /// A row lacks a configured column
    #[error("line {line}: missing {field} column (index {index})")]
    MissingColumn {
        line: u64,
        field: &'static str,
        index: usize,
    },

    /// A row has a blank name
    #[error("line {line}: {field} name is blank")]
    BlankField { line: u64, field: &'static str },

    /// The source has no data rows
    #[error("geography source contains no data rows")]
    Empty,
}

/// Why a user-entered region was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// Wrong segment count or blank segments
    #[error("{0}")]
    Malformed(#[from] TypesError),

    /// Well-formed but absent from the catalog
    #[error("region '{0}' does not exist in the geography catalog")]
    Unknown(RegionKey),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
