// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Set algebra over named sets of string tokens.
//!
//! Every operation is a left fold over the sets in the order they were
//! supplied. The first operand is copied before folding, so the caller's
//! sets are never modified.
//!
//! # Example
//!
//! ```
//! use venn_sets::algebra::{compute, NamedSet, Operation};
//!
//! let a = NamedSet::new("A", ["1", "2", "3"]);
//! let b = NamedSet::new("B", ["2", "3", "4"]);
//!
//! let result = compute(Operation::Difference, &[a, b]).unwrap();
//! assert_eq!(result.label, "A - B");
//! assert_eq!(result.elements.len(), 1);
//! assert!(result.elements.contains("1"));
//! ```

pub mod ordering;

use crate::error::SetError;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};
use tracing::debug;

/// The elements of a set. Elements are opaque tokens; the container order is
/// not used for display (see [`ordering`]).
pub type Elements = BTreeSet<String>;

/// A labeled set supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedSet {
    pub name: String,
    pub elements: Elements,
}

impl NamedSet {
    pub fn new<I, S>(name: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// The four supported set operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCountMacro)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
}

impl Operation {
    /// Infix symbol used when building the expression label.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Union => "∪",
            Operation::Intersection => "∩",
            Operation::Difference => "-",
            Operation::SymmetricDifference => "Δ",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Union => "union",
            Operation::Intersection => "intersection",
            Operation::Difference => "difference",
            Operation::SymmetricDifference => "symmetric difference",
        }
    }

    /// The exact number of sets this operation requires, if it is fixed.
    pub fn required_arity(self) -> Option<usize> {
        match self {
            Operation::SymmetricDifference => Some(2),
            _ => None,
        }
    }

    /// Expression label such as "A ∪ B ∪ C".
    pub fn label(self, sets: &[NamedSet]) -> String {
        let separator = format!(" {} ", self.symbol());
        sets.iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The aggregate set produced by an operation, with its expression label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputationResult {
    pub label: String,
    pub elements: Elements,
}

/// Apply `operation` to `sets` in the given order.
///
/// # Errors
///
/// - [`SetError::InvalidArity`] for symmetric difference unless exactly two
///   sets are supplied.
/// - [`SetError::NoSets`] when `sets` is empty.
pub fn compute(operation: Operation, sets: &[NamedSet]) -> Result<ComputationResult, SetError> {
    if let Some(expected) = operation.required_arity() {
        if sets.len() != expected {
            return Err(SetError::InvalidArity {
                operation,
                expected,
                actual: sets.len(),
            });
        }
    }
    let (first, rest) = sets
        .split_first()
        .ok_or(SetError::NoSets { operation })?;

    let mut elements = first.elements.clone();
    for set in rest {
        elements = match operation {
            Operation::Union => elements.union(&set.elements).cloned().collect(),
            Operation::Intersection => elements.intersection(&set.elements).cloned().collect(),
            Operation::Difference => elements.difference(&set.elements).cloned().collect(),
            Operation::SymmetricDifference => elements
                .symmetric_difference(&set.elements)
                .cloned()
                .collect(),
        };
    }

    let label = operation.label(sets);
    debug!(%label, size = elements.len(), "computed set expression");
    Ok(ComputationResult { label, elements })
}
