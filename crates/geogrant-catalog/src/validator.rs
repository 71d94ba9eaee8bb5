//! Region validation against the catalog

use crate::catalog::GeoCatalog;
use crate::error::RegionError;
use geogrant_types::RegionKey;
use std::collections::BTreeSet;

/// Checks that user-entered regions are well formed and exist
#[derive(Debug, Clone, Copy)]
pub struct RegionValidator<'a> {
    catalog: &'a GeoCatalog,
}

impl<'a> RegionValidator<'a> {
    /// Create a validator over a catalog
    pub fn new(catalog: &'a GeoCatalog) -> Self {
        Self { catalog }
    }

    /// Normalize a raw region and check it exists
    pub fn validate(&self, raw: &str) -> Result<RegionKey, RegionError> {
        let key = RegionKey::parse(raw)?;
        if !self.catalog.exists(&key) {
            return Err(RegionError::Unknown(key));
        }
        Ok(key)
    }

    /// Validate a batch, collecting every failure
    ///
    /// Returns the normalized keys when every region passes; otherwise all
    /// errors, in input order.
    pub fn validate_all<'r, I>(&self, raws: I) -> Result<BTreeSet<RegionKey>, Vec<RegionError>>
    where
        I: IntoIterator<Item = &'r str>,
    {
        let mut keys = BTreeSet::new();
        let mut errors = Vec::new();

        for raw in raws {
            match self.validate(raw) {
                Ok(key) => {
                    keys.insert(key);
                }
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            Ok(keys)
        } else {
            Err(errors)
        }
    }
}
