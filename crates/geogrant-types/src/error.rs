//! Error types for geogrant-types

use crate::region::RegionKey;
use thiserror::Error;

/// Errors raised while constructing core values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// Region string does not have 1 to 3 non-empty segments
    #[error("malformed region '{raw}': {reason}")]
    MalformedRegion { raw: String, reason: String },

    /// The same keys were requested in both include and exclude
    #[error("regions cannot be both included and excluded: {}", format_keys(.0))]
    ConflictingRegions(Vec<RegionKey>),

    /// Distributor name is blank
    #[error("distributor name must not be empty")]
    EmptyName,
}

impl TypesError {
    pub(crate) fn malformed(raw: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRegion {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}

fn format_keys(keys: &[RegionKey]) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for core value construction
pub type Result<T> = std::result::Result<T, TypesError>;
