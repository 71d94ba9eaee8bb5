//! # GeoGrant Policy
//!
//! Permission evaluation for hierarchical region grants.
//!
//! ## Overview
//!
//! A distributor's [`AccessPolicy`](geogrant_types::AccessPolicy) lists the
//! regions it includes and excludes. Access to a region is inferred by
//! cascading across the hierarchy:
//!
//! - An explicit exclude always wins over an include of the same key
//! - A country grant covers its states and cities unless they are excluded
//! - A state grant covers its cities unless they are excluded
//! - An explicit city include grants that city even without its ancestors
//! - Anything not covered is denied
//!
//! ## Key Components
//!
//! - [`PermissionEvaluator`]: Decides single keys and batches
//! - [`Decision`]: Outcome for one key with its rationale
//! - [`EvaluationMode`]: Full report or denied-only batch output
//! - [`DistributorDirectory`]: Lookup seam used by batch evaluation
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use geogrant_policy::PermissionEvaluator;
//! use geogrant_types::{AccessPolicy, RegionKey};
//!
//! let include: BTreeSet<_> = [RegionKey::parse("India").unwrap()].into();
//! let exclude: BTreeSet<_> = [RegionKey::parse("Tamil Nadu-India").unwrap()].into();
//! let policy = AccessPolicy::new(include, exclude).unwrap();
//!
//! let evaluator = PermissionEvaluator::new();
//! assert!(evaluator.is_granted(&policy, &RegionKey::parse("Karnataka-India").unwrap()));
//! assert!(!evaluator.is_granted(&policy, &RegionKey::parse("Chennai-Tamil Nadu-India").unwrap()));
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod decision;
pub mod directory;
pub mod error;
pub mod evaluator;

// Re-exports
pub use decision::Decision;
pub use directory::DistributorDirectory;
pub use error::{PolicyError, Result};
pub use evaluator::{check_access, EvaluationMode, PermissionEvaluator};
