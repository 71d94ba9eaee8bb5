//! Permission decision types

use geogrant_types::{DistributorName, RegionKey};
use serde::Serialize;

/// Outcome of evaluating one region for one distributor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Distributor that was evaluated
    pub distributor: DistributorName,

    /// Region that was evaluated
    pub region: RegionKey,

    /// Whether access is granted
    pub granted: bool,

    /// Human-readable explanation
    pub rationale: String,
}

impl Decision {
    /// Create a decision, deriving the rationale
    pub fn new(distributor: &DistributorName, region: &RegionKey, granted: bool) -> Self {
        let rationale = if granted {
            format!("{} has access to {}", distributor, region)
        } else {
            format!("{} does not have access to {}", distributor, region)
        };

        Self {
            distributor: distributor.clone(),
            region: region.clone(),
            granted,
            rationale,
        }
    }

    /// Check if access was granted
    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// Check if access was denied
    pub fn is_denied(&self) -> bool {
        !self.granted
    }
}
