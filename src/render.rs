// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Diagram plans for an external renderer.
//!
//! A plan lists, for every atomic region, the label to draw inside it and
//! the fill style to paint it with. Drawing the curves is left to the
//! renderer; nothing here knows about pixels or layout.

use crate::algebra::ordering::region_label;
use crate::algebra::{ComputationResult, NamedSet, Operation};
use crate::error::SetError;
use crate::geometry::RegionId;
use crate::partition::{self, highlight, Emphasis, Strength};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Fill color and opacity for a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FillStyle {
    pub color: &'static str,
    pub alpha: f32,
}

impl FillStyle {
    /// Style for an emphasis level on a diagram of `arity` sets.
    pub fn for_emphasis(emphasis: Emphasis, arity: usize) -> Self {
        let (color, alpha) = match emphasis {
            Emphasis::Baseline => ("lightgrey", 0.3),
            Emphasis::Union => ("skyblue", 0.7),
            Emphasis::Intersection if arity == 2 => ("orange", 0.8),
            Emphasis::Intersection => ("orange", 0.9),
            Emphasis::Difference => ("lightgreen", 0.7),
            Emphasis::SymmetricDifference => ("lightcoral", 0.7),
        };
        Self { color, alpha }
    }
}

/// Everything the renderer needs for one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionPlan {
    pub id: RegionId,
    pub label: String,
    pub emphasis: Emphasis,
    pub strength: Option<Strength>,
    pub fill: FillStyle,
}

/// Why no diagram is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notice {
    /// More than three sets: only the textual result is shown.
    TooManySets,
    /// Fewer than two sets: nothing to overlap.
    TooFewSets,
    /// Symmetric difference has no 3-set diagram.
    SymmetricNeedsTwo,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::TooManySets => write!(
                f,
                "Result computed (a Venn diagram cannot be drawn for more than 3 sets)."
            ),
            Notice::TooFewSets => write!(f, "A Venn diagram needs at least 2 sets."),
            Notice::SymmetricNeedsTwo => write!(
                f,
                "The symmetric difference diagram is only available for 2 sets."
            ),
        }
    }
}

/// A drawable diagram: curve labels plus one entry per region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramPlan {
    pub set_labels: Vec<String>,
    pub regions: Vec<RegionPlan>,
}

/// Either a diagram or the reason it was left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Diagram {
    Drawn(DiagramPlan),
    Omitted { notice: Notice },
}

impl Diagram {
    /// Plan the diagram for `sets` under `operation`.
    ///
    /// `UnsupportedArity` and `NotApplicable` are turned into
    /// [`Diagram::Omitted`]; they are never returned as errors.
    pub fn build(
        sets: &[NamedSet],
        operation: Operation,
        result: &ComputationResult,
        label_elements: usize,
    ) -> Diagram {
        match DiagramPlan::build(sets, operation, result, label_elements) {
            Ok(plan) => Diagram::Drawn(plan),
            Err(err) => {
                let notice = match &err {
                    SetError::NotApplicable { .. } => Notice::SymmetricNeedsTwo,
                    SetError::UnsupportedArity { actual } if *actual < 2 => Notice::TooFewSets,
                    _ => Notice::TooManySets,
                };
                warn!(%err, "diagram omitted");
                Diagram::Omitted { notice }
            }
        }
    }

    pub fn plan(&self) -> Option<&DiagramPlan> {
        match self {
            Diagram::Drawn(plan) => Some(plan),
            Diagram::Omitted { .. } => None,
        }
    }
}

impl DiagramPlan {
    pub fn build(
        sets: &[NamedSet],
        operation: Operation,
        result: &ComputationResult,
        label_elements: usize,
    ) -> Result<Self, SetError> {
        let regions = partition::partition(sets)?;
        let plan = highlight(&regions, operation, &result.elements)?;
        let arity = regions.arity();
        let counts = plan.counts();
        debug!(
            %operation,
            highlighted = regions.len() - counts[Emphasis::Baseline as usize],
            baseline = counts[Emphasis::Baseline as usize],
            "planned diagram"
        );

        let regions = regions
            .iter()
            .zip(plan.iter())
            .map(|(region, entry)| RegionPlan {
                id: region.id,
                label: region_label(&region.elements, label_elements),
                emphasis: entry.emphasis,
                strength: entry.strength,
                fill: FillStyle::for_emphasis(entry.emphasis, arity),
            })
            .collect();

        Ok(Self {
            set_labels: sets.iter().map(|s| s.name.clone()).collect(),
            regions,
        })
    }

    pub fn region(&self, id: &str) -> Option<&RegionPlan> {
        let id: RegionId = id.parse().ok()?;
        self.regions.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::compute;
    use crate::algebra::ordering::LABEL_ELEMENTS;

    fn diagram(operation: Operation, sets: &[NamedSet]) -> Diagram {
        let result = compute(operation, sets).unwrap();
        Diagram::build(sets, operation, &result, LABEL_ELEMENTS)
    }

    #[test]
    fn test_fill_styles() {
        assert_eq!(FillStyle::for_emphasis(Emphasis::Baseline, 2).color, "lightgrey");
        assert_eq!(FillStyle::for_emphasis(Emphasis::Intersection, 2).alpha, 0.8);
        assert_eq!(FillStyle::for_emphasis(Emphasis::Intersection, 3).alpha, 0.9);
        assert_eq!(
            FillStyle::for_emphasis(Emphasis::SymmetricDifference, 2).color,
            "lightcoral"
        );
    }

    #[test]
    fn test_two_set_plan() {
        let sets = [
            NamedSet::new("A", ["1", "2", "3", "4", "5", "9"]),
            NamedSet::new("B", ["9", "10"]),
        ];
        let d = diagram(Operation::Difference, &sets);
        let plan = d.plan().unwrap();
        assert_eq!(plan.set_labels, vec!["A", "B"]);

        let only_a = plan.region("10").unwrap();
        assert_eq!(only_a.label, "1\n2\n3\n...");
        assert_eq!(only_a.fill.color, "lightgreen");

        let both = plan.region("11").unwrap();
        assert_eq!(both.label, "9");
        assert_eq!(both.emphasis, Emphasis::Baseline);
        assert_eq!(both.fill.color, "lightgrey");
    }

    #[test]
    fn test_empty_region_label() {
        let sets = [NamedSet::new("A", ["1"]), NamedSet::new("B", ["2"])];
        let d = diagram(Operation::Union, &sets);
        assert_eq!(d.plan().unwrap().region("11").unwrap().label, "");
    }

    #[test]
    fn test_too_many_sets() {
        let sets: Vec<NamedSet> = (0..4).map(|i| NamedSet::new(format!("S{}", i), ["1"])).collect();
        assert_eq!(
            diagram(Operation::Union, &sets),
            Diagram::Omitted {
                notice: Notice::TooManySets
            }
        );
    }

    #[test]
    fn test_single_set() {
        let sets = [NamedSet::new("A", ["1"])];
        assert_eq!(
            diagram(Operation::Union, &sets),
            Diagram::Omitted {
                notice: Notice::TooFewSets
            }
        );
    }

    #[test]
    fn test_symmetric_difference_on_three() {
        let sets = [
            NamedSet::new("A", ["1"]),
            NamedSet::new("B", ["2"]),
            NamedSet::new("C", ["3"]),
        ];
        let result = compute(Operation::SymmetricDifference, &sets[..2]).unwrap();
        let d = Diagram::build(&sets, Operation::SymmetricDifference, &result, LABEL_ELEMENTS);
        assert_eq!(
            d,
            Diagram::Omitted {
                notice: Notice::SymmetricNeedsTwo
            }
        );
    }

    #[test]
    fn test_serialized_shape() {
        let sets = [NamedSet::new("A", ["1"]), NamedSet::new("B", ["1", "2"])];
        let json = serde_json::to_value(diagram(Operation::Intersection, &sets)).unwrap();
        assert_eq!(json["kind"], "drawn");
        assert_eq!(json["regions"][2]["id"], "11");
        assert_eq!(json["regions"][2]["emphasis"], "intersection");
        assert_eq!(json["regions"][2]["strength"], "exact");
    }
}
