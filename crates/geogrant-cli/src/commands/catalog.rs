//! Catalog statistics command

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use geogrant_catalog::GeoCatalog;
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

/// Table row for catalog display
#[derive(Debug, Serialize, Tabled)]
struct CatalogRow {
    source: String,
    countries: usize,
    states: usize,
    cities: usize,
}

/// Print place counts for the loaded catalog
pub fn execute(catalog: &GeoCatalog, source: &Path, format: OutputFormat) -> CliResult<()> {
    let stats = catalog.stats();
    let row = CatalogRow {
        source: source.display().to_string(),
        countries: stats.countries,
        states: stats.states,
        cities: stats.cities,
    };
    output::print_output(vec![row], format, "Catalog is empty")
}
