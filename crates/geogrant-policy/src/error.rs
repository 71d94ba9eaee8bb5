//! Error types for permission evaluation

use thiserror::Error;

/// Permission evaluation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// Batch evaluation named a distributor that does not exist
    #[error("Distributor {name} not found")]
    UnknownDistributor { name: String },
}

/// Result type for policy operations
pub type Result<T> = std::result::Result<T, PolicyError>;
