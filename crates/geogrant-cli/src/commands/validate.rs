//! Region validation command

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use geogrant_catalog::{GeoCatalog, RegionError, RegionValidator};
use geogrant_registry::split_region_list;
use serde::Serialize;
use tabled::Tabled;

/// Table row for one validated region
#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    input: String,
    region: String,
    status: String,
    detail: String,
}

impl ValidationRow {
    fn new(input: &str, outcome: Result<String, RegionError>) -> Self {
        match outcome {
            Ok(region) => Self {
                input: input.to_string(),
                region,
                status: "valid".into(),
                detail: String::new(),
            },
            Err(err) => Self {
                input: input.to_string(),
                region: match &err {
                    RegionError::Unknown(key) => key.to_string(),
                    RegionError::Malformed(_) => "-".into(),
                },
                status: match &err {
                    RegionError::Unknown(_) => "unknown".into(),
                    RegionError::Malformed(_) => "malformed".into(),
                },
                detail: err.to_string(),
            },
        }
    }
}

/// Validate a comma-separated region list against the catalog
pub fn execute(catalog: &GeoCatalog, regions: &str, format: OutputFormat) -> CliResult<()> {
    let validator = RegionValidator::new(catalog);
    let rows: Vec<ValidationRow> = split_region_list(regions)
        .iter()
        .map(|raw| ValidationRow::new(raw, validator.validate(raw).map(|key| key.to_string())))
        .collect();
    output::print_output(rows, format, "No regions given")
}
