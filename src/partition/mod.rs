// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partitioning of 2 or 3 sets into atomic Venn regions.
//!
//! Every element of the union of the input sets belongs to exactly one
//! atomic region: the one whose pattern matches the element's membership in
//! each set. Partitioning therefore computes each element's membership
//! pattern once and files the element under that region, which is the same
//! as evaluating the boolean combinations `A\B\C`, `(A∩B)\C`, ... directly.
//!
//! Region ids are positional: curve k of every region is the k-th set in
//! the order the sets were supplied.

pub mod highlight;

pub use highlight::{highlight, Emphasis, HighlightPlan, Strength};

use crate::algebra::{Elements, NamedSet};
use crate::error::SetError;
use crate::geometry::{Curve, RegionId};
use serde::Serialize;
use tracing::debug;

/// Number of sets a diagram can be drawn for.
pub const DIAGRAM_ARITIES: [usize; 2] = [2, 3];

/// Check whether a diagram can be drawn for `n` sets.
pub fn is_diagrammable(n: usize) -> bool {
    DIAGRAM_ARITIES.contains(&n)
}

/// One atomic region and the elements it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub id: RegionId,
    pub elements: Elements,
}

/// The complete partition of a diagram, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Regions {
    arity: usize,
    regions: Vec<Region>,
}

impl Regions {
    /// Number of sets (curves) in the diagram.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn get(&self, id: RegionId) -> Option<&Elements> {
        self.regions.iter().find(|r| r.id == id).map(|r| &r.elements)
    }

    /// Look up a region by its bit-string, e.g. `"110"`.
    pub fn get_by_str(&self, id: &str) -> Option<&Elements> {
        id.parse().ok().and_then(|id| self.get(id))
    }
}

impl<'a> IntoIterator for &'a Regions {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

/// Partition `sets` into their `2^N - 1` atomic regions.
///
/// # Errors
///
/// [`SetError::UnsupportedArity`] unless exactly 2 or 3 sets are supplied.
///
/// # Example
///
/// ```
/// use venn_sets::algebra::NamedSet;
/// use venn_sets::partition::partition;
///
/// let a = NamedSet::new("A", ["1", "2", "3"]);
/// let b = NamedSet::new("B", ["2", "3", "4"]);
/// let regions = partition(&[a, b]).unwrap();
///
/// assert_eq!(regions.len(), 3);
/// assert!(regions.get_by_str("11").unwrap().contains("2"));
/// ```
pub fn partition(sets: &[NamedSet]) -> Result<Regions, SetError> {
    let arity = sets.len();
    if !is_diagrammable(arity) {
        return Err(SetError::UnsupportedArity { actual: arity });
    }

    let mut regions: Vec<Region> = RegionId::all(arity)
        .into_iter()
        .map(|id| Region {
            id,
            elements: Elements::new(),
        })
        .collect();

    for set in sets {
        for element in &set.elements {
            let mut membership = RegionId::outside(arity);
            for curve in Curve::all(arity) {
                if sets[curve.as_usize()].elements.contains(element) {
                    membership.insert(curve);
                }
            }
            if let Some(region) = regions.iter_mut().find(|r| r.id == membership) {
                region.elements.insert(element.clone());
            }
        }
    }

    debug!(
        arity,
        sizes = ?regions.iter().map(|r| (r.id.to_string(), r.elements.len())).collect::<Vec<_>>(),
        "partitioned sets into regions"
    );
    Ok(Regions { arity, regions })
}
