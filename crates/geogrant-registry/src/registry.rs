//! Distributor registry
//!
//! Owns the session's distributors and is the single writer to them. Every
//! mutation goes through [`DistributorRegistry::register`], which either
//! stores a fully validated distributor or leaves the store untouched.

use crate::admission::SubordinationConstraint;
use crate::error::{RegionList, RegistryError, Result, Violation};
use crate::request::DistributorRequest;
use crate::store::InMemoryDistributorStore;
use geogrant_catalog::{GeoCatalog, RegionValidator};
use geogrant_policy::{Decision, EvaluationMode, PermissionEvaluator};
use geogrant_types::{AccessPolicy, Distributor, DistributorName, RegionKey};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Distributor registry
pub struct DistributorRegistry {
    catalog: Arc<GeoCatalog>,
    store: InMemoryDistributorStore,
    evaluator: PermissionEvaluator,
}

impl DistributorRegistry {
    /// Create an empty registry over a catalog
    pub fn new(catalog: Arc<GeoCatalog>) -> Self {
        Self {
            catalog,
            store: InMemoryDistributorStore::new(),
            evaluator: PermissionEvaluator::new(),
        }
    }

    /// Use a specific evaluator
    pub fn with_evaluator(mut self, evaluator: PermissionEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn catalog(&self) -> &GeoCatalog {
        &self.catalog
    }

    /// Admit a distributor or sub-distributor
    ///
    /// `DuplicateName` and `UnknownParent` abort immediately. Everything
    /// else is collected into a single `Rejected`. A sub-distributor whose
    /// parent denies any of its regions fails with `ParentDenied`.
    pub fn register(&mut self, request: DistributorRequest) -> Result<&Distributor> {
        let raw_name = request.name.trim();
        if !raw_name.is_empty() && self.store.get(raw_name).is_some() {
            warn!(distributor = raw_name, "Rejected duplicate distributor");
            return Err(RegistryError::DuplicateName(raw_name.to_string()));
        }

        let mut violations = Vec::new();

        let parent = match request.parent.as_deref().map(str::trim) {
            None => None,
            Some("") => {
                violations.push(Violation::MissingParent);
                None
            }
            Some(name) => match self.store.get(name) {
                Some(parent) => Some(parent),
                None => {
                    warn!(parent = name, "Rejected distributor with unknown parent");
                    return Err(RegistryError::UnknownParent(name.to_string()));
                }
            },
        };

        let name = DistributorName::parse(raw_name);
        if name.is_err() {
            violations.push(Violation::EmptyName);
        }
        if request.include.is_empty() {
            violations.push(Violation::EmptyInclude);
        }

        let include = self.validate_list(&request.include, RegionList::Include, &mut violations);
        let exclude = self.validate_list(&request.exclude, RegionList::Exclude, &mut violations);
        violations.extend(
            AccessPolicy::conflicts(&include, &exclude)
                .into_iter()
                .map(Violation::ConflictingRegion),
        );

        if !violations.is_empty() {
            warn!(
                distributor = raw_name,
                violations = violations.len(),
                "Rejected distributor"
            );
            return Err(RegistryError::Rejected(violations));
        }

        let name = name?;
        let mut policy = AccessPolicy::new(include, exclude)?;

        let distributor = match parent {
            Some(parent) => {
                let constraint = SubordinationConstraint::new(&self.evaluator);
                let denied = constraint.denied(&self.store, parent, &policy)?;
                if !denied.is_empty() {
                    warn!(
                        distributor = %name,
                        parent = %parent.name,
                        denied = denied.len(),
                        "Parent denied sub-distributor"
                    );
                    return Err(RegistryError::ParentDenied {
                        parent: parent.name.to_string(),
                        denied,
                    });
                }

                let inherited = constraint.restrict(parent, &mut policy);
                info!(
                    distributor = %name,
                    parent = %parent.name,
                    inherited,
                    "Created sub-distributor"
                );
                Distributor::sub(name, policy, parent.name.clone())
            }
            None => {
                info!(
                    distributor = %name,
                    include = policy.include().len(),
                    exclude = policy.exclude().len(),
                    "Created distributor"
                );
                Distributor::root(name, policy)
            }
        };

        self.store.insert(distributor)
    }

    /// Evaluate regions for a named distributor, granted and denied alike
    ///
    /// A blank or unknown name and invalid regions are reported together
    /// before anything is evaluated.
    pub fn check_permission(
        &self,
        name: &str,
        regions: &BTreeSet<String>,
    ) -> Result<Vec<Decision>> {
        let name = name.trim();
        let mut violations = Vec::new();

        if name.is_empty() {
            violations.push(Violation::EmptyName);
        } else if self.store.get(name).is_none() {
            violations.push(Violation::UnknownDistributor(name.to_string()));
        }

        let keys = match RegionValidator::new(&self.catalog)
            .validate_all(regions.iter().map(String::as_str))
        {
            Ok(keys) => keys,
            Err(errors) => {
                violations.extend(errors.into_iter().map(Violation::Region));
                BTreeSet::new()
            }
        };

        if !violations.is_empty() {
            return Err(RegistryError::Rejected(violations));
        }

        Ok(self
            .evaluator
            .evaluate_batch(&self.store, name, &keys, EvaluationMode::Report)?)
    }

    /// Look up a distributor by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&Distributor> {
        self.store.get(name)
    }

    /// All distributors, ordered by name
    pub fn distributors(&self) -> impl Iterator<Item = &Distributor> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn validate_list(
        &self,
        raws: &BTreeSet<String>,
        list: RegionList,
        violations: &mut Vec<Violation>,
    ) -> BTreeSet<RegionKey> {
        let validator = RegionValidator::new(&self.catalog);
        let mut keys = BTreeSet::new();

        for raw in raws {
            match validator.validate(raw) {
                Ok(key) => {
                    keys.insert(key);
                }
                Err(error) => violations.push(Violation::InvalidRegion { list, error }),
            }
        }

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<GeoCatalog> {
        Arc::new(
            GeoCatalog::builder()
                .with_city("Chennai", "Tamil Nadu", "India")
                .with_city("Madurai", "Tamil Nadu", "India")
                .with_city("Bengaluru", "Karnataka", "India")
                .with_city("Kochi", "Kerala", "India")
                .with_city("Osaka", "Osaka", "Japan")
                .build(),
        )
    }

    fn registry() -> DistributorRegistry {
        DistributorRegistry::new(catalog())
            .with_evaluator(PermissionEvaluator::new().with_emit_audit_events(false))
    }

    fn key(raw: &str) -> RegionKey {
        RegionKey::parse(raw).unwrap()
    }

    #[test]
    fn test_register_root() {
        let mut registry = registry();
        let d = registry
            .register(
                DistributorRequest::root(" Distributor1 ")
                    .with_include("India, Japan")
                    .with_exclude("Tamil Nadu-India"),
            )
            .unwrap();

        assert_eq!(d.name.as_str(), "Distributor1");
        assert!(!d.is_sub_distributor());
        assert_eq!(d.policy.include().len(), 2);
        assert!(d.policy.excludes(&key("TAMIL NADU-INDIA")));
    }

    #[test]
    fn test_duplicate_name_aborts() {
        let mut registry = registry();
        registry
            .register(DistributorRequest::root("D1").with_include("India"))
            .unwrap();

        let err = registry
            .register(DistributorRequest::root("d1").with_include("Narnia"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(name) if name == "d1"));
    }

    #[test]
    fn test_unknown_parent_aborts_before_region_checks() {
        let mut registry = registry();
        let err = registry
            .register(DistributorRequest::sub("D2", "ghost").with_include("Narnia"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnknownParent(name) if name == "ghost"));
    }

    #[test]
    fn test_violations_are_accumulated() {
        let mut registry = registry();
        let err = registry
            .register(
                DistributorRequest::root("  ")
                    .with_exclude("Narnia, India-Tamil Nadu-Chennai-X, India"),
            )
            .unwrap_err();

        let RegistryError::Rejected(violations) = &err else {
            panic!("expected rejection, got {err:?}");
        };
        assert!(violations.contains(&Violation::EmptyName));
        assert!(violations.contains(&Violation::EmptyInclude));
        assert_eq!(
            violations
                .iter()
                .filter(|v| matches!(v, Violation::InvalidRegion { list: RegionList::Exclude, .. }))
                .count(),
            2
        );
        assert_eq!(err.messages().len(), 4);
    }

    #[test]
    fn test_conflicting_regions_rejected() {
        let mut registry = registry();
        let err = registry
            .register(
                DistributorRequest::root("D1")
                    .with_include("India, Kerala-India")
                    .with_exclude("kerala - india"),
            )
            .unwrap_err();

        let RegistryError::Rejected(violations) = err else {
            panic!("expected rejection");
        };
        assert_eq!(
            violations,
            vec![Violation::ConflictingRegion(key("Kerala-India"))]
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_blank_parent_is_a_violation() {
        let mut registry = registry();
        let err = registry
            .register(DistributorRequest::sub("D2", " ").with_include("India"))
            .unwrap_err();
        assert!(
            matches!(err, RegistryError::Rejected(ref v) if v == &vec![Violation::MissingParent])
        );
    }

    #[test]
    fn test_sub_distributor_inherits_exclusions() {
        let mut registry = registry();
        registry
            .register(
                DistributorRequest::root("D1")
                    .with_include("India")
                    .with_exclude("Tamil Nadu-India, Kochi-Kerala-India"),
            )
            .unwrap();

        let child = registry
            .register(DistributorRequest::sub("D2", "d1").with_include("Karnataka-India"))
            .unwrap();

        assert_eq!(child.parent.as_ref().map(|p| p.as_str()), Some("D1"));
        assert!(child.policy.excludes(&key("Tamil Nadu-India")));
        assert!(child.policy.excludes(&key("Kochi-Kerala-India")));
        assert_eq!(child.policy.include().len(), 1);
    }

    #[test]
    fn test_parent_denied_leaves_store_unchanged() {
        let mut registry = registry();
        registry
            .register(
                DistributorRequest::root("D1")
                    .with_include("India")
                    .with_exclude("Tamil Nadu-India"),
            )
            .unwrap();

        let err = registry
            .register(
                DistributorRequest::sub("D2", "D1")
                    .with_include("Karnataka-India, Japan")
                    .with_exclude("Chennai-Tamil Nadu-India"),
            )
            .unwrap_err();

        assert_eq!(
            err.messages(),
            vec![
                "D1 does not have access to JAPAN".to_string(),
                "D1 does not have access to CHENNAI-TAMIL NADU-INDIA".to_string(),
            ]
        );
        assert_eq!(registry.len(), 1);
        assert!(registry.get("D2").is_none());
    }

    #[test]
    fn test_check_permission_report() {
        let mut registry = registry();
        registry
            .register(
                DistributorRequest::root("D1")
                    .with_include("India")
                    .with_exclude("Tamil Nadu-India"),
            )
            .unwrap();

        let regions = crate::split_region_list("Chennai-Tamil Nadu-India, Bengaluru-Karnataka-India");
        let decisions = registry.check_permission("d1", &regions).unwrap();

        let rationales: Vec<&str> = decisions.iter().map(|d| d.rationale.as_str()).collect();
        assert_eq!(
            rationales,
            vec![
                "D1 has access to BENGALURU-KARNATAKA-INDIA",
                "D1 does not have access to CHENNAI-TAMIL NADU-INDIA",
            ]
        );
    }

    #[test]
    fn test_check_permission_accumulates_errors() {
        let registry = registry();
        let regions = crate::split_region_list("Narnia, India");
        let err = registry.check_permission("ghost", &regions).unwrap_err();

        assert_eq!(
            err.messages(),
            vec![
                "Distributor ghost not found".to_string(),
                "region 'NARNIA' does not exist in the geography catalog".to_string(),
            ]
        );
    }

    #[test]
    fn test_check_permission_empty_regions() {
        let mut registry = registry();
        registry
            .register(DistributorRequest::root("D1").with_include("India"))
            .unwrap();

        assert!(registry.check_permission("D1", &BTreeSet::new()).unwrap().is_empty());
    }
}
