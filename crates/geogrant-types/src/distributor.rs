//! Distributor types

use crate::error::{Result, TypesError};
use crate::policy::AccessPolicy;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Distributor name, compared case-insensitively
///
/// The trimmed spelling entered by the user is kept for display; equality,
/// ordering and hashing use the uppercased form.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct DistributorName(String);

impl DistributorName {
    /// Create a name from raw input
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TypesError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Name as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-folded lookup key
    pub fn key(&self) -> String {
        self.0.to_uppercase()
    }
}

impl PartialEq for DistributorName {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for DistributorName {}

impl Hash for DistributorName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for DistributorName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DistributorName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for DistributorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A distributor and its grants
#[derive(Debug, Clone, Serialize)]
pub struct Distributor {
    /// Unique name
    pub name: DistributorName,

    /// Include/Exclude grants
    pub policy: AccessPolicy,

    /// Parent distributor, `None` for root distributors
    pub parent: Option<DistributorName>,

    /// When the distributor was admitted
    pub created_at: DateTime<Utc>,
}

impl Distributor {
    /// Create a root distributor
    pub fn root(name: DistributorName, policy: AccessPolicy) -> Self {
        Self {
            name,
            policy,
            parent: None,
            created_at: Utc::now(),
        }
    }

    /// Create a distributor under a parent
    pub fn sub(name: DistributorName, policy: AccessPolicy, parent: DistributorName) -> Self {
        Self {
            name,
            policy,
            parent: Some(parent),
            created_at: Utc::now(),
        }
    }

    /// Whether this distributor has a parent
    pub fn is_sub_distributor(&self) -> bool {
        self.parent.is_some()
    }
}
