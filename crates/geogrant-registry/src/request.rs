//! Distributor creation requests

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raw input for a new distributor
///
/// Nothing here is validated yet; the registry normalizes and checks every
/// field on admission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributorRequest {
    /// Distributor name as entered
    pub name: String,

    /// Candidate regions to include
    #[serde(default)]
    pub include: BTreeSet<String>,

    /// Candidate regions to exclude
    #[serde(default)]
    pub exclude: BTreeSet<String>,

    /// Parent distributor name, for sub-distributors
    #[serde(default)]
    pub parent: Option<String>,
}

impl DistributorRequest {
    /// Request a top-level distributor
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Request a sub-distributor under `parent`
    pub fn sub(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent.into()),
            ..Default::default()
        }
    }

    /// Set include regions from a comma-separated list
    pub fn with_include(mut self, raw: &str) -> Self {
        self.include = split_region_list(raw);
        self
    }

    /// Set exclude regions from a comma-separated list
    pub fn with_exclude(mut self, raw: &str) -> Self {
        self.exclude = split_region_list(raw);
        self
    }

    /// Whether this request names a parent
    pub fn is_sub_distributor(&self) -> bool {
        self.parent.is_some()
    }
}

/// Split a comma-separated region list
///
/// Tokens are trimmed; blank tokens are dropped and duplicates collapse.
pub fn split_region_list(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}
