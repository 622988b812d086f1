// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two-set diagrams: partition contents and highlight rules end-to-end.

mod common;

use common::{elements, lit, lettered, plan};
use venn_sets::{partition, Emphasis, Operation};

#[test]
fn test_venn2_regions() {
    let sets = lettered(&[&["1", "2", "3"], &["2", "3", "4"]]);
    let regions = partition(&sets).unwrap();

    assert_eq!(regions.len(), 3);
    assert_eq!(regions.get_by_str("10"), Some(&elements(&["1"])));
    assert_eq!(regions.get_by_str("01"), Some(&elements(&["4"])));
    assert_eq!(regions.get_by_str("11"), Some(&elements(&["2", "3"])));
}

#[test]
fn test_venn2_highlights() {
    let sets = lettered(&[&["1", "2", "3"], &["2", "3", "4"]]);

    assert_eq!(lit(&plan(Operation::Union, &sets)), vec!["10", "01", "11"]);
    assert_eq!(lit(&plan(Operation::Intersection, &sets)), vec!["11"]);
    assert_eq!(lit(&plan(Operation::Difference, &sets)), vec!["10"]);
    assert_eq!(
        lit(&plan(Operation::SymmetricDifference, &sets)),
        vec!["10", "01"]
    );
}

#[test]
fn test_venn2_difference_region_is_fixed() {
    // B \ A is empty, yet the "only in first set" region is still the one shown.
    let sets = lettered(&[&["1"], &["1", "2"]]);
    let p = plan(Operation::Difference, &sets);
    assert_eq!(lit(&p), vec!["10"]);
    assert_eq!(p.emphasis_of("01"), Some(Emphasis::Baseline));
}

#[test]
fn test_venn2_subset() {
    let sets = lettered(&[&["1", "2"], &["1", "2", "3"]]);
    let regions = partition(&sets).unwrap();
    assert!(regions.get_by_str("10").unwrap().is_empty());

    // A ∩ B = A = region 11 exactly.
    assert_eq!(lit(&plan(Operation::Intersection, &sets)), vec!["11"]);
    // Union skips the empty region.
    assert_eq!(lit(&plan(Operation::Union, &sets)), vec!["01", "11"]);
}
