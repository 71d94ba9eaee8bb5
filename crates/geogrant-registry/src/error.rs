//! Registry error types

use geogrant_catalog::RegionError;
use geogrant_policy::{Decision, PolicyError};
use geogrant_types::{RegionKey, TypesError};
use std::fmt;
use thiserror::Error;

/// Which list of a request a region came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionList {
    Include,
    Exclude,
}

impl fmt::Display for RegionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionList::Include => write!(f, "Include"),
            RegionList::Exclude => write!(f, "Exclude"),
        }
    }
}

/// A single problem found while validating a request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("Distributor name must not be empty")]
    EmptyName,

    #[error("Include regions must not be empty")]
    EmptyInclude,

    #[error("Parent distributor name must not be empty")]
    MissingParent,

    #[error("{list} region: {error}")]
    InvalidRegion { list: RegionList, error: RegionError },

    #[error("{0}")]
    Region(RegionError),

    #[error("Region {0} cannot be both included and excluded")]
    ConflictingRegion(RegionKey),

    #[error("Distributor {0} not found")]
    UnknownDistributor(String),
}

/// Registry errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Distributor {0} already exists")]
    DuplicateName(String),

    #[error("Parent distributor {0} not found")]
    UnknownParent(String),

    #[error("Request rejected with {} violation(s)", .0.len())]
    Rejected(Vec<Violation>),

    #[error("Parent distributor {parent} denies {} region(s)", .denied.len())]
    ParentDenied { parent: String, denied: Vec<Decision> },

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Types(#[from] TypesError),
}

impl RegistryError {
    /// Individual lines to show the user
    pub fn messages(&self) -> Vec<String> {
        match self {
            RegistryError::Rejected(violations) => {
                violations.iter().map(ToString::to_string).collect()
            }
            RegistryError::ParentDenied { denied, .. } => {
                denied.iter().map(|d| d.rationale.clone()).collect()
            }
            other => vec![other.to_string()],
        }
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
