//! Permission evaluator
//!
//! The evaluator is a pure function of a policy and a region key. Batch
//! evaluation adds distributor lookup and the two output modes used by the
//! rest of the system.

use crate::decision::Decision;
use crate::directory::DistributorDirectory;
use crate::error::{PolicyError, Result};
use geogrant_types::{AccessPolicy, Distributor, RegionAncestry, RegionKey};
use tracing::{debug, info};

/// Which decisions a batch evaluation returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationMode {
    /// Every decision, granted and denied, for display
    #[default]
    Report,

    /// Only denied decisions; they form the set that blocks an admission
    DeniedOnly,
}

/// Explicit access to exactly this key
///
/// Exclude overrides include; keys in neither set are denied.
pub fn check_access(policy: &AccessPolicy, key: &RegionKey) -> bool {
    !policy.excludes(key) && policy.includes(key)
}

/// Cascading permission evaluator
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    /// Whether to emit audit events
    emit_audit_events: bool,
}

impl PermissionEvaluator {
    /// Create a new evaluator
    pub fn new() -> Self {
        Self {
            emit_audit_events: true,
        }
    }

    /// Set whether to emit audit events
    pub fn with_emit_audit_events(mut self, emit: bool) -> Self {
        self.emit_audit_events = emit;
        self
    }

    /// Decide access to a key under a policy
    pub fn is_granted(&self, policy: &AccessPolicy, key: &RegionKey) -> bool {
        let excluded = policy.excludes(key);

        match key.ancestry() {
            RegionAncestry::Country => check_access(policy, key),

            RegionAncestry::State { country } => {
                check_access(policy, key) || (check_access(policy, &country) && !excluded)
            }

            RegionAncestry::City { state, country } => {
                if check_access(policy, &country) {
                    if check_access(policy, &state) {
                        check_access(policy, key) || !excluded
                    } else {
                        // Country grant applies unless state or city is carved out
                        !policy.excludes(&state) && !excluded
                    }
                } else {
                    (check_access(policy, &state) && !excluded) || check_access(policy, key)
                }
            }
        }
    }

    /// Evaluate one region for a distributor
    pub fn evaluate(&self, distributor: &Distributor, region: &RegionKey) -> Decision {
        let granted = self.is_granted(&distributor.policy, region);
        let decision = Decision::new(&distributor.name, region, granted);

        if self.emit_audit_events {
            log_decision(&decision);
        }

        decision
    }

    /// Evaluate a batch of regions for a named distributor
    ///
    /// Fails without producing any decision when the distributor is unknown.
    pub fn evaluate_batch<'k, D, I>(
        &self,
        directory: &D,
        name: &str,
        regions: I,
        mode: EvaluationMode,
    ) -> Result<Vec<Decision>>
    where
        D: DistributorDirectory + ?Sized,
        I: IntoIterator<Item = &'k RegionKey>,
    {
        let distributor = directory
            .lookup(name)
            .ok_or_else(|| PolicyError::UnknownDistributor {
                name: name.trim().to_string(),
            })?;

        let decisions: Vec<Decision> = regions
            .into_iter()
            .map(|region| self.evaluate(distributor, region))
            .filter(|decision| match mode {
                EvaluationMode::Report => true,
                EvaluationMode::DeniedOnly => decision.is_denied(),
            })
            .collect();

        debug!(
            distributor = %distributor.name,
            mode = ?mode,
            returned = decisions.len(),
            "Evaluated region batch"
        );

        Ok(decisions)
    }
}

impl Default for PermissionEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Log a decision for audit
fn log_decision(decision: &Decision) {
    if decision.granted {
        debug!(
            distributor = %decision.distributor,
            region = %decision.region,
            "Access granted"
        );
    } else {
        info!(
            distributor = %decision.distributor,
            region = %decision.region,
            "Access denied"
        );
    }
}
