// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Highlight plans: which regions to emphasize for an operation.
//!
//! Every region first gets [`Emphasis::Baseline`]. The operation pass then
//! raises some regions to the operation's emphasis:
//!
//! | Operation              | 2 sets                  | 3 sets                  |
//! |------------------------|-------------------------|-------------------------|
//! | union                  | overlaps result         | overlaps result         |
//! | intersection           | equals result           | equals result           |
//! | difference             | `10` only               | overlaps result         |
//! | symmetric difference   | `10` and `01`           | not applicable          |
//!
//! The 2-set difference rule deliberately shows only the "first set only"
//! region rather than applying the overlap test.

use crate::algebra::{Elements, Operation};
use crate::error::SetError;
use crate::geometry::{Curve, RegionId};
use crate::partition::Regions;
use serde::Serialize;
use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};
use tracing::trace;

/// Emphasis level of one region.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCountMacro, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum Emphasis {
    /// Neutral, de-emphasized.
    Baseline,
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
}

impl From<Operation> for Emphasis {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::Union => Emphasis::Union,
            Operation::Intersection => Emphasis::Intersection,
            Operation::Difference => Emphasis::Difference,
            Operation::SymmetricDifference => Emphasis::SymmetricDifference,
        }
    }
}

/// Why a region was highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strength {
    /// The region's elements are exactly the result.
    Exact,
    /// The region shares at least one element with the result.
    Overlap,
    /// The region is highlighted by a fixed rule for this diagram size.
    Canonical,
}

/// Emphasis assigned to one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionHighlight {
    pub id: RegionId,
    pub emphasis: Emphasis,
    /// None for baseline regions.
    pub strength: Option<Strength>,
}

impl RegionHighlight {
    pub fn is_highlighted(&self) -> bool {
        self.emphasis != Emphasis::Baseline
    }
}

/// Emphasis for every region of a diagram, in region display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightPlan {
    operation: Operation,
    entries: Vec<RegionHighlight>,
}

impl HighlightPlan {
    /// A plan with every region at baseline.
    fn baseline(regions: &Regions, operation: Operation) -> Self {
        Self {
            operation,
            entries: regions
                .iter()
                .map(|r| RegionHighlight {
                    id: r.id,
                    emphasis: Emphasis::Baseline,
                    strength: None,
                })
                .collect(),
        }
    }

    fn raise(&mut self, id: RegionId, strength: Strength) {
        let emphasis = Emphasis::from(self.operation);
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            trace!(region = %id, ?emphasis, ?strength, "highlighting region");
            entry.emphasis = emphasis;
            entry.strength = Some(strength);
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn get(&self, id: RegionId) -> Option<&RegionHighlight> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Emphasis of the region with bit-string `id`, if the diagram has it.
    pub fn emphasis_of(&self, id: &str) -> Option<Emphasis> {
        let id: RegionId = id.parse().ok()?;
        self.get(id).map(|e| e.emphasis)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionHighlight> {
        self.entries.iter()
    }

    /// Ids of the regions raised above baseline.
    pub fn highlighted(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.entries
            .iter()
            .filter(|e| e.is_highlighted())
            .map(|e| e.id)
    }

    /// Number of regions at each emphasis level, indexed by `Emphasis as usize`.
    pub fn counts(&self) -> [usize; Emphasis::COUNT] {
        let mut counts = [0; Emphasis::COUNT];
        for entry in &self.entries {
            counts[entry.emphasis as usize] += 1;
        }
        counts
    }
}

/// Build the highlight plan for `operation` given its `result`.
///
/// # Errors
///
/// [`SetError::NotApplicable`] for symmetric difference on a 3-set diagram.
pub fn highlight(
    regions: &Regions,
    operation: Operation,
    result: &Elements,
) -> Result<HighlightPlan, SetError> {
    let arity = regions.arity();
    let mut plan = HighlightPlan::baseline(regions, operation);

    let overlapping = |plan: &mut HighlightPlan| {
        for region in regions {
            if !region.elements.is_disjoint(result) {
                plan.raise(region.id, Strength::Overlap);
            }
        }
    };

    match (operation, arity) {
        (Operation::Union, _) | (Operation::Difference, 3) => overlapping(&mut plan),
        (Operation::Intersection, _) => {
            for region in regions {
                if &region.elements == result {
                    plan.raise(region.id, Strength::Exact);
                }
            }
        }
        (Operation::Difference, _) => plan.raise(only_in(0, arity), Strength::Canonical),
        (Operation::SymmetricDifference, 2) => {
            plan.raise(only_in(0, arity), Strength::Canonical);
            plan.raise(only_in(1, arity), Strength::Canonical);
        }
        (Operation::SymmetricDifference, sets) => {
            return Err(SetError::NotApplicable { operation, sets });
        }
    }

    Ok(plan)
}

/// The region inside curve `position` and no other.
fn only_in(position: u8, arity: usize) -> RegionId {
    let mut id = RegionId::outside(arity);
    id.insert(Curve::new(position));
    id
}
