//! Sub-distributor admission against a parent policy

use crate::error::Result;
use geogrant_policy::{Decision, DistributorDirectory, EvaluationMode, PermissionEvaluator};
use geogrant_types::{AccessPolicy, Distributor};
use tracing::debug;

/// Gates a child policy on its parent
///
/// Every key the child names, included or excluded, must be granted by the
/// parent. An admitted child carries all of the parent's exclusions.
#[derive(Debug, Clone, Copy)]
pub struct SubordinationConstraint<'a> {
    evaluator: &'a PermissionEvaluator,
}

impl<'a> SubordinationConstraint<'a> {
    pub fn new(evaluator: &'a PermissionEvaluator) -> Self {
        Self { evaluator }
    }

    /// Keys of the child policy that the parent denies
    ///
    /// An empty result means the child may be admitted.
    pub fn denied<D>(
        &self,
        directory: &D,
        parent: &Distributor,
        child: &AccessPolicy,
    ) -> Result<Vec<Decision>>
    where
        D: DistributorDirectory + ?Sized,
    {
        let probe = child.probe_set();
        let denied = self.evaluator.evaluate_batch(
            directory,
            parent.name.as_str(),
            &probe,
            EvaluationMode::DeniedOnly,
        )?;

        debug!(
            parent = %parent.name,
            probed = probe.len(),
            denied = denied.len(),
            "Checked child policy against parent"
        );

        Ok(denied)
    }

    /// Copy the parent's exclusions into an admitted child policy
    pub fn restrict(&self, parent: &Distributor, child: &mut AccessPolicy) -> usize {
        child.inherit_exclusions(&parent.policy)
    }
}
