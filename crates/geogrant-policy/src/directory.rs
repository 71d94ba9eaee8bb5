//! Distributor lookup seam
//!
//! Batch evaluation resolves distributors by name through this trait so the
//! evaluator stays independent of how distributors are stored.

use geogrant_types::Distributor;

/// Read access to distributors by name
pub trait DistributorDirectory {
    /// Find a distributor by name, case-insensitively
    fn lookup(&self, name: &str) -> Option<&Distributor>;

    /// Check if a distributor exists
    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}
