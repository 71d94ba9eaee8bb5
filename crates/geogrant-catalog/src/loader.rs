//! CSV ingestion for the geography catalog
//!
//! The source is a CSV file with a header row and one row per city. Only
//! the city, state and country columns are read; their positions are
//! configurable and default to the `cities.csv` layout:
//!
//! ```text
//! City Code,Province Code,Country Code,City Name,Province Name,Country Name
//! ```

use crate::catalog::GeoCatalog;
use crate::error::{CatalogError, Result};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Zero-based column positions of the place names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogColumns {
    pub city: usize,
    pub state: usize,
    pub country: usize,
}

impl Default for CatalogColumns {
    fn default() -> Self {
        Self {
            city: 3,
            state: 4,
            country: 5,
        }
    }
}

/// Load a catalog from a CSV file
pub fn load_csv(path: impl AsRef<Path>, columns: &CatalogColumns) -> Result<GeoCatalog> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "Loading geography catalog");
    read_csv(file, columns)
}

/// Build a catalog from CSV data
///
/// The first record is treated as a header and skipped. Repeated rows are
/// collapsed.
pub fn read_csv<R: Read>(reader: R, columns: &CatalogColumns) -> Result<GeoCatalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut builder = GeoCatalog::builder();
    let mut rows = 0usize;

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let city = field(&record, line, "city", columns.city)?;
        let state = field(&record, line, "state", columns.state)?;
        let country = field(&record, line, "country", columns.country)?;

        builder.insert(city, state, country);
        rows += 1;
    }

    if rows == 0 {
        return Err(CatalogError::Empty);
    }

    let catalog = builder.build();
    let stats = catalog.stats();
    info!(
        rows,
        countries = stats.countries,
        states = stats.states,
        cities = stats.cities,
        "Loaded geography catalog"
    );

    Ok(catalog)
}

fn field<'r>(
    record: &'r StringRecord,
    line: u64,
    name: &'static str,
    index: usize,
) -> Result<&'r str> {
    let value = record.get(index).ok_or(CatalogError::MissingColumn {
        line,
        field: name,
        index,
    })?;
    if value.trim().is_empty() {
        return Err(CatalogError::BlankField { line, field: name });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geogrant_types::RegionKey;

    const HEADER: &str = "City Code,Province Code,Country Code,City Name,Province Name,Country Name\n";

    #[test]
    fn test_read_default_layout() {
        let data = format!(
            "{}CHE,TN,IN,Chennai,Tamil Nadu,India\nBLR,KA,IN,Bengaluru,Karnataka,India\n",
            HEADER
        );
        let catalog = read_csv(data.as_bytes(), &CatalogColumns::default()).unwrap();

        assert!(catalog.exists(&RegionKey::parse("Chennai-Tamil Nadu-India").unwrap()));
        assert!(catalog.exists(&RegionKey::parse("Karnataka-India").unwrap()));
        assert_eq!(catalog.stats().cities, 2);
    }

    #[test]
    fn test_read_custom_columns() {
        let data = "country,state,city\nIndia,Kerala,Kochi\n";
        let columns = CatalogColumns {
            city: 2,
            state: 1,
            country: 0,
        };
        let catalog = read_csv(data.as_bytes(), &columns).unwrap();
        assert!(catalog.exists(&RegionKey::parse("Kochi-Kerala-India").unwrap()));
    }

    #[test]
    fn test_quoted_fields() {
        let data = format!("{}X,Y,Z,\"Washington, D.C.\",District of Columbia,United States\n", HEADER);
        let catalog = read_csv(data.as_bytes(), &CatalogColumns::default()).unwrap();
        assert!(catalog.exists(
            &RegionKey::parse("Washington, D.C.-District of Columbia-United States").unwrap()
        ));
    }

    #[test]
    fn test_missing_column() {
        let data = format!("{}CHE,TN,IN,Chennai,Tamil Nadu\n", HEADER);
        let err = read_csv(data.as_bytes(), &CatalogColumns::default()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingColumn {
                line: 2,
                field: "country",
                index: 5
            }
        ));
    }

    #[test]
    fn test_blank_field() {
        let data = format!("{}CHE,TN,IN,Chennai,  ,India\n", HEADER);
        let err = read_csv(data.as_bytes(), &CatalogColumns::default()).unwrap_err();
        assert!(matches!(err, CatalogError::BlankField { field: "state", .. }));
    }

    #[test]
    fn test_header_only_is_empty() {
        let err = read_csv(HEADER.as_bytes(), &CatalogColumns::default()).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }
}
