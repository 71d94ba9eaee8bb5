//! Access policy types
//!
//! An access policy is the pair of region sets a distributor is granted:
//! regions it may serve (include) and regions carved out of those grants
//! (exclude). A key never appears in both sets.

use crate::error::{Result, TypesError};
use crate::region::RegionKey;
use serde::Serialize;
use std::collections::BTreeSet;

/// Include/Exclude region sets of a distributor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccessPolicy {
    include: BTreeSet<RegionKey>,
    exclude: BTreeSet<RegionKey>,
}

impl AccessPolicy {
    /// Create a policy, rejecting keys present in both sets
    pub fn new(include: BTreeSet<RegionKey>, exclude: BTreeSet<RegionKey>) -> Result<Self> {
        let conflicts = Self::conflicts(&include, &exclude);
        if !conflicts.is_empty() {
            return Err(TypesError::ConflictingRegions(conflicts));
        }
        Ok(Self { include, exclude })
    }

    /// Keys present in both sets
    pub fn conflicts(include: &BTreeSet<RegionKey>, exclude: &BTreeSet<RegionKey>) -> Vec<RegionKey> {
        include.intersection(exclude).cloned().collect()
    }

    /// Included regions
    pub fn include(&self) -> &BTreeSet<RegionKey> {
        &self.include
    }

    /// Excluded regions
    pub fn exclude(&self) -> &BTreeSet<RegionKey> {
        &self.exclude
    }

    /// Whether the key is explicitly included
    pub fn includes(&self, key: &RegionKey) -> bool {
        self.include.contains(key)
    }

    /// Whether the key is explicitly excluded
    pub fn excludes(&self, key: &RegionKey) -> bool {
        self.exclude.contains(key)
    }

    /// Every key this policy mentions, include entries first
    ///
    /// Used as the probe set when the policy is checked against a parent.
    pub fn probe_set(&self) -> BTreeSet<RegionKey> {
        let mut probe = self.include.clone();
        for key in &self.exclude {
            if !probe.contains(key) {
                probe.insert(key.clone());
            }
        }
        probe
    }

    /// Copy a parent's exclusions into this policy
    ///
    /// Parent entries replace identical child entries. Returns the number of
    /// keys that were not already excluded.
    pub fn inherit_exclusions(&mut self, parent: &AccessPolicy) -> usize {
        let mut added = 0;
        for key in &parent.exclude {
            if self.exclude.replace(key.clone()).is_none() {
                added += 1;
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[&str]) -> BTreeSet<RegionKey> {
        raw.iter().map(|r| RegionKey::parse(r).unwrap()).collect()
    }

    #[test]
    fn test_new_rejects_conflicts() {
        let err = AccessPolicy::new(keys(&["India", "Karnataka-India"]), keys(&["india"]))
            .unwrap_err();
        assert_eq!(err, TypesError::ConflictingRegions(vec![RegionKey::parse("INDIA").unwrap()]));
    }

    #[test]
    fn test_membership() {
        let policy = AccessPolicy::new(keys(&["India"]), keys(&["Tamil Nadu-India"])).unwrap();
        assert!(policy.includes(&RegionKey::parse("india").unwrap()));
        assert!(policy.excludes(&RegionKey::parse("TAMIL NADU-INDIA").unwrap()));
        assert!(!policy.includes(&RegionKey::parse("Tamil Nadu-India").unwrap()));
    }

    #[test]
    fn test_probe_set_is_union() {
        let policy = AccessPolicy::new(keys(&["India"]), keys(&["Tamil Nadu-India"])).unwrap();
        assert_eq!(policy.probe_set(), keys(&["India", "Tamil Nadu-India"]));
    }

    #[test]
    fn test_inherit_exclusions() {
        let parent = AccessPolicy::new(
            keys(&["India"]),
            keys(&["Tamil Nadu-India", "Kerala-India"]),
        )
        .unwrap();
        let mut child = AccessPolicy::new(keys(&["Karnataka-India"]), keys(&["Kerala-India"])).unwrap();

        let added = child.inherit_exclusions(&parent);
        assert_eq!(added, 1);
        assert_eq!(child.exclude(), &keys(&["Kerala-India", "Tamil Nadu-India"]));
        assert_eq!(child.include(), &keys(&["Karnataka-India"]));
    }
}
