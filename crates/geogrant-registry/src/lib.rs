//! GeoGrant Registry - Distributor store and admission control
//!
//! This crate owns the session's distributors:
//!
//! - **InMemoryDistributorStore**: Distributors keyed by case-folded name
//! - **DistributorRequest**: Raw, unvalidated input for a new distributor
//! - **SubordinationConstraint**: Parent gating and exclusion inheritance
//! - **DistributorRegistry**: Validation, admission and permission checks
//!
//! ## Admission
//!
//! Duplicate names and unknown parents abort a request immediately. Every
//! other problem with the request is accumulated into one rejection. A
//! sub-distributor is only admitted when its parent grants every region it
//! names, and it always inherits the parent's exclusions.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod admission;
pub mod error;
pub mod registry;
pub mod request;
pub mod store;

// Re-exports
pub use admission::SubordinationConstraint;
pub use error::{RegionList, RegistryError, Result, Violation};
pub use registry::DistributorRegistry;
pub use request::{split_region_list, DistributorRequest};
pub use store::InMemoryDistributorStore;
