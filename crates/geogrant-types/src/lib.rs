//! GeoGrant Types - Core types for hierarchical geographic access grants
//!
//! Distributors are granted access to regions of a three-tier geography
//! (country → state → city). Each distributor carries an include set and an
//! exclude set of region keys; sub-distributors are constrained by the grants
//! of their parent.
//!
//! ## Key Concepts
//!
//! - **RegionKey**: Normalized `city-state-country`, `state-country` or
//!   `country` identifier with precomputed ancestry
//! - **AccessPolicy**: Include/Exclude pair, never overlapping
//! - **Distributor**: Named holder of an access policy, optionally under a parent

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod distributor;
pub mod error;
pub mod policy;
pub mod region;

// Re-export main types
pub use distributor::{Distributor, DistributorName};
pub use error::{Result, TypesError};
pub use policy::AccessPolicy;
pub use region::{RegionAncestry, RegionKey, RegionLevel, MAX_SEGMENTS, SEGMENT_SEPARATOR};
