//! Geography catalog
//!
//! Nested index of valid places: country → state → set of cities. Names are
//! stored trimmed and uppercased so lookups by normalized region keys are
//! exact matches.

use geogrant_types::{RegionKey, SEGMENT_SEPARATOR};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

type States = BTreeMap<String, BTreeSet<String>>;

/// Immutable index of valid geographic keys
#[derive(Debug, Clone, Default)]
pub struct GeoCatalog {
    countries: BTreeMap<String, States>,
}

/// Counts of places in a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
}

impl GeoCatalog {
    /// Start building a catalog
    pub fn builder() -> GeoCatalogBuilder {
        GeoCatalogBuilder::default()
    }

    /// Whether the key names a place in the catalog
    ///
    /// Absence at any ancestor level short-circuits to `false`.
    pub fn exists(&self, key: &RegionKey) -> bool {
        let Some(states) = self.countries.get(key.country_name()) else {
            return false;
        };
        match (key.state_name(), key.city_name()) {
            (None, _) => true,
            (Some(state), None) => states.contains_key(state),
            (Some(state), Some(city)) => states
                .get(state)
                .is_some_and(|cities| cities.contains(city)),
        }
    }

    /// Place counts
    pub fn stats(&self) -> CatalogStats {
        let states = self.countries.values().map(BTreeMap::len).sum();
        let cities = self
            .countries
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeSet::len)
            .sum();
        CatalogStats {
            countries: self.countries.len(),
            states,
            cities,
        }
    }

    /// Country names, sorted
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Whether the catalog has no places at all
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// Builder for [`GeoCatalog`]
#[derive(Debug, Default)]
pub struct GeoCatalogBuilder {
    countries: BTreeMap<String, States>,
}

impl GeoCatalogBuilder {
    /// Record a city with its state and country
    ///
    /// Returns `false` when the city was already present.
    pub fn insert(&mut self, city: &str, state: &str, country: &str) -> bool {
        let (city, state, country) = (normalize(city), normalize(state), normalize(country));
        for name in [&city, &state, &country] {
            if name.contains(SEGMENT_SEPARATOR) {
                warn!(name = %name, "Place name contains a hyphen and cannot be addressed by a region key");
            }
        }

        self.countries
            .entry(country)
            .or_default()
            .entry(state)
            .or_default()
            .insert(city)
    }

    /// Record a city, consuming the builder
    pub fn with_city(mut self, city: &str, state: &str, country: &str) -> Self {
        self.insert(city, state, country);
        self
    }

    /// Finish building
    pub fn build(self) -> GeoCatalog {
        GeoCatalog {
            countries: self.countries,
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_uppercase()
}
