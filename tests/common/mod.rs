// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use venn_sets::{compute, highlight, partition, Elements, HighlightPlan, NamedSet, Operation};

/// Build sets named A, B, C, ... from slices of elements.
pub fn lettered(sets: &[&[&str]]) -> Vec<NamedSet> {
    sets.iter()
        .enumerate()
        .map(|(i, items)| NamedSet::new(venn_sets::input::default_name(i), items.iter().copied()))
        .collect()
}

pub fn elements(items: &[&str]) -> Elements {
    items.iter().map(|s| s.to_string()).collect()
}

/// Run the whole core pipeline: compute, partition, highlight.
pub fn plan(operation: Operation, sets: &[NamedSet]) -> HighlightPlan {
    let result = compute(operation, sets).unwrap();
    let regions = partition(sets).unwrap();
    highlight(&regions, operation, &result.elements).unwrap()
}

/// Region ids raised above baseline, in display order.
pub fn lit(plan: &HighlightPlan) -> Vec<String> {
    plan.highlighted().map(|id| id.to_string()).collect()
}
