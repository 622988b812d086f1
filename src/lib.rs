// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Set algebra over labeled string sets, with Venn diagram planning.
//!
//! A user supplies 2–10 named sets of string tokens and picks one of four
//! operations. The crate computes the result and, for 2 or 3 sets, plans a
//! Venn diagram: every atomic region gets its elements as a label and an
//! emphasis level chosen by the operation.
//!
//! # Architecture
//!
//! Everything in the core is a pure function of its inputs:
//!
//! - [`algebra`]: left folds of union, intersection, difference and symmetric
//!   difference over the sets in input order, plus display ordering.
//! - [`partition`]: splits 2 or 3 sets into their `2^N - 1` disjoint atomic
//!   regions and builds the highlight plan for an operation.
//!
//! Around the core:
//!
//! - [`input`]: parses comma-separated input, applies the [`config::Limits`].
//! - [`render`]: turns a highlight plan into labels and fill styles for an
//!   external renderer.
//! - [`report`]: the complete response to one action, as text or JSON.
//!
//! # Region ids
//!
//! A region id is a bit-string with one digit per set, in input order:
//! for sets A, B, C the id `"101"` is the region inside A and C but not B.
//! See [`geometry::RegionId`].
//!
//! # Example
//!
//! ```
//! use venn_sets::{compute, partition, highlight, NamedSet, Operation};
//!
//! let sets = [
//!     NamedSet::new("A", ["1", "2"]),
//!     NamedSet::new("B", ["2", "3"]),
//!     NamedSet::new("C", ["2", "4"]),
//! ];
//! let result = compute(Operation::Intersection, &sets).unwrap();
//! let regions = partition(&sets).unwrap();
//! let plan = highlight(&regions, Operation::Intersection, &result.elements).unwrap();
//!
//! let lit: Vec<String> = plan.highlighted().map(|id| id.to_string()).collect();
//! assert_eq!(lit, vec!["111"]);
//! ```

pub mod algebra;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod partition;
pub mod render;
pub mod report;

// Re-export commonly used types
pub use algebra::{compute, ComputationResult, Elements, NamedSet, Operation};
pub use config::Limits;
pub use error::{ConfigError, InputError, SetError};
pub use partition::{highlight, partition, Emphasis, HighlightPlan, Regions};
pub use report::Report;
