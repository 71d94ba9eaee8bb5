//! GeoGrant Catalog - Geography index and region validation
//!
//! The catalog is built once from a tabular geography source (one row per
//! city, with its state and country) and is immutable afterwards. It decides
//! which region keys name real places; permission semantics live elsewhere.
//!
//! ## Key Components
//!
//! - [`GeoCatalog`]: Nested country → state → city index
//! - [`GeoCatalogBuilder`]: Incremental construction from rows
//! - [`load_csv`] / [`read_csv`]: CSV ingestion with configurable columns
//! - [`RegionValidator`]: Syntax and existence check for user-entered regions

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod catalog;
pub mod error;
pub mod loader;
pub mod validator;

// Re-exports
pub use catalog::{CatalogStats, GeoCatalog, GeoCatalogBuilder};
pub use error::{CatalogError, RegionError, Result};
pub use loader::{load_csv, read_csv, CatalogColumns};
pub use validator::RegionValidator;
