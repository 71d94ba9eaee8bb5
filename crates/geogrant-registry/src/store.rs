//! In-memory distributor store

use crate::error::{RegistryError, Result};
use geogrant_policy::DistributorDirectory;
use geogrant_types::Distributor;
use std::collections::btree_map::{BTreeMap, Entry};

/// In-memory distributor store
///
/// Keyed by the uppercased name, so lookups ignore case and listing order
/// is stable.
#[derive(Debug, Default)]
pub struct InMemoryDistributorStore {
    distributors: BTreeMap<String, Distributor>,
}

impl InMemoryDistributorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a distributor, rejecting name collisions
    pub fn insert(&mut self, distributor: Distributor) -> Result<&Distributor> {
        match self.distributors.entry(distributor.name.key()) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateName(
                distributor.name.to_string(),
            )),
            Entry::Vacant(entry) => Ok(entry.insert(distributor)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Distributor> {
        self.distributors.get(&name.trim().to_uppercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Distributor> {
        self.distributors.values()
    }

    pub fn len(&self) -> usize {
        self.distributors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distributors.is_empty()
    }
}

impl DistributorDirectory for InMemoryDistributorStore {
    fn lookup(&self, name: &str) -> Option<&Distributor> {
        self.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geogrant_types::{AccessPolicy, DistributorName};

    fn distributor(name: &str) -> Distributor {
        Distributor::root(DistributorName::parse(name).unwrap(), AccessPolicy::default())
    }

    #[test]
    fn test_insert_and_lookup_ignore_case() {
        let mut store = InMemoryDistributorStore::new();
        store.insert(distributor("Distributor1")).unwrap();

        assert!(store.contains("DISTRIBUTOR1"));
        assert!(store.contains("  distributor1 "));
        assert_eq!(store.get("distributor1").unwrap().name.as_str(), "Distributor1");
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut store = InMemoryDistributorStore::new();
        store.insert(distributor("Distributor1")).unwrap();

        let err = store.insert(distributor("DISTRIBUTOR1")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(name) if name == "DISTRIBUTOR1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_iter_sorted_by_name() {
        let mut store = InMemoryDistributorStore::new();
        store.insert(distributor("beta")).unwrap();
        store.insert(distributor("Alpha")).unwrap();

        let names: Vec<&str> = store.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta"]);
    }
}
