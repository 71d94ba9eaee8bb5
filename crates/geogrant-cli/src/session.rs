//! Interactive session state
//!
//! A session owns the registry for the lifetime of one run and renders the
//! outcome of each menu action. Rejections are reported and the session
//! carries on; only output failures propagate.

use crate::error::CliResult;
use crate::output::{self, print_error, print_errors, print_success, OutputFormat};
use geogrant_policy::Decision;
use geogrant_registry::{split_region_list, DistributorRegistry, DistributorRequest, RegistryError};
use geogrant_types::{Distributor, RegionKey};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tabled::Tabled;

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateDistributor,
    CreateSubDistributor,
    CheckPermission,
    ViewDistributors,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::CreateDistributor,
        MenuChoice::CreateSubDistributor,
        MenuChoice::CheckPermission,
        MenuChoice::ViewDistributors,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CreateDistributor => "Create Distributor",
            MenuChoice::CreateSubDistributor => "Create Sub-Distributor",
            MenuChoice::CheckPermission => "Check Permission",
            MenuChoice::ViewDistributors => "View Distributors",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Table row for distributor display
#[derive(Debug, Serialize, Tabled)]
struct DistributorRow {
    name: String,
    include: String,
    exclude: String,
    parent: String,
    created: String,
}

impl From<&Distributor> for DistributorRow {
    fn from(distributor: &Distributor) -> Self {
        Self {
            name: distributor.name.to_string(),
            include: join_keys(distributor.policy.include()),
            exclude: join_keys(distributor.policy.exclude()),
            parent: distributor
                .parent
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".into()),
            created: distributor.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn join_keys(keys: &BTreeSet<RegionKey>) -> String {
    if keys.is_empty() {
        return "-".into();
    }
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One interactive session
pub struct Session {
    registry: DistributorRegistry,
    format: OutputFormat,
}

impl Session {
    pub fn new(registry: DistributorRegistry, format: OutputFormat) -> Self {
        Self { registry, format }
    }

    pub fn registry(&self) -> &DistributorRegistry {
        &self.registry
    }

    /// Create a distributor or sub-distributor
    ///
    /// Returns whether the distributor was stored.
    pub fn create(&mut self, request: DistributorRequest) -> bool {
        match self.registry.register(request) {
            Ok(distributor) => {
                let kind = if distributor.is_sub_distributor() {
                    "Sub-distributor"
                } else {
                    "Distributor"
                };
                print_success(&format!("{} {} created successfully", kind, distributor.name));
                true
            }
            Err(err) => {
                report_rejection("Distributor was not created:", &err);
                false
            }
        }
    }

    /// Check a comma-separated region list for a distributor
    ///
    /// Returns the decisions that were printed, or `None` if the request was
    /// rejected.
    pub fn check(&self, name: &str, regions: &str) -> CliResult<Option<Vec<Decision>>> {
        let regions = split_region_list(regions);
        let decisions = match self.registry.check_permission(name, &regions) {
            Ok(decisions) => decisions,
            Err(err) => {
                report_rejection("Permission check failed:", &err);
                return Ok(None);
            }
        };

        match self.format {
            OutputFormat::Table => {
                println!("Check Permission Result:");
                for decision in &decisions {
                    if decision.granted {
                        print_success(&decision.rationale);
                    } else {
                        print_error(&decision.rationale);
                    }
                }
            }
            format => output::print_single(&decisions, format)?,
        }

        Ok(Some(decisions))
    }

    /// Print every stored distributor
    pub fn view(&self) -> CliResult<()> {
        let rows: Vec<DistributorRow> = self
            .registry
            .distributors()
            .map(DistributorRow::from)
            .collect();
        output::print_output(rows, self.format, "No distributors found.")
    }
}

fn report_rejection(heading: &str, err: &RegistryError) {
    print_errors(heading, &err.messages());
}
