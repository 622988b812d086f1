// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Collection of raw user input into named sets.
//!
//! The core algebra trusts its inputs; this layer is where size caps,
//! deduplication and naming rules are enforced.

use crate::algebra::{Elements, NamedSet, Operation};
use crate::config::Limits;
use crate::error::InputError;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::debug;

/// Default name for the set at `position` (0-based): `A`, `B`, `C`, ...
pub fn default_name(position: usize) -> String {
    if position < 26 {
        char::from(b'A' + position as u8).to_string()
    } else {
        format!("S{}", position + 1)
    }
}

/// Split a comma-separated string into distinct, trimmed, non-empty tokens.
///
/// ```
/// use venn_sets::input::parse_elements;
///
/// let elements = parse_elements(" 1, 2,,2 ,3 ");
/// assert_eq!(elements.len(), 3);
/// ```
pub fn parse_elements(raw: &str) -> Elements {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// One set as typed by the user: a name and its raw element list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetInput {
    pub name: String,
    pub raw: String,
}

impl SetInput {
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
        }
    }

    /// Parse a `NAME=a,b,c` definition. Without `=`, the whole text is the
    /// element list and the set gets [`default_name`] for `position`.
    pub fn parse(definition: &str, position: usize) -> Result<Self, InputError> {
        match definition.split_once('=') {
            Some((name, raw)) => {
                let name = name.trim();
                if name.contains(',') {
                    return Err(InputError::MalformedSet(definition.to_string()));
                }
                Ok(Self::new(name, raw))
            }
            None => Ok(Self::new(default_name(position), definition)),
        }
    }
}

/// Turns [`SetInput`]s into validated [`NamedSet`]s.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    limits: Limits,
}

impl InputCollector {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Validate and convert all inputs, preserving their order.
    ///
    /// # Errors
    ///
    /// - [`InputError::SetCount`] if the number of sets is outside the limits
    /// - [`InputError::EmptyName`] / [`InputError::DuplicateName`] for bad names
    /// - [`InputError::TooManyElements`] if a set exceeds `max_elements`
    /// - [`InputError::MissingSets`] if any set has no elements
    pub fn collect(&self, inputs: &[SetInput]) -> Result<Vec<NamedSet>, InputError> {
        let Limits {
            min_sets,
            max_sets,
            max_elements,
            ..
        } = self.limits;
        if !(min_sets..=max_sets).contains(&inputs.len()) {
            return Err(InputError::SetCount {
                min: min_sets,
                max: max_sets,
                actual: inputs.len(),
            });
        }

        let mut seen = HashSet::new();
        let mut missing = Vec::new();
        let mut sets = Vec::with_capacity(inputs.len());

        for (position, input) in inputs.iter().enumerate() {
            let name = input.name.trim();
            if name.is_empty() {
                return Err(InputError::EmptyName {
                    position: position + 1,
                });
            }
            if !seen.insert(name) {
                return Err(InputError::DuplicateName {
                    name: name.to_string(),
                });
            }

            let elements = parse_elements(&input.raw);
            if elements.len() > max_elements {
                return Err(InputError::TooManyElements {
                    name: name.to_string(),
                    count: elements.len(),
                    max: max_elements,
                });
            }
            if elements.is_empty() {
                missing.push(name.to_string());
            }
            sets.push(NamedSet {
                name: name.to_string(),
                elements,
            });
        }

        if !missing.is_empty() {
            return Err(InputError::MissingSets { names: missing });
        }
        debug!(count = sets.len(), "collected input sets");
        Ok(sets)
    }
}

impl FromStr for Operation {
    type Err = InputError;

    /// Accepts English names, the operator symbols, and the Spanish form
    /// labels (`Unión (∪)`, `Diferencia simétrica`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let word = normalized
            .split(|c: char| c == '(' || c == '[')
            .next()
            .unwrap_or("")
            .trim()
            .replace(['_', ' '], "-");

        let operation = match word.as_str() {
            "union" | "unión" | "∪" | "|" => Operation::Union,
            "intersection" | "intersección" | "interseccion" | "∩" | "&" => {
                Operation::Intersection
            }
            "difference" | "diferencia" | "-" | "minus" => Operation::Difference,
            "symmetric-difference" | "sym-diff" | "symdiff" | "xor" | "diferencia-simétrica"
            | "diferencia-simetrica" | "δ" | "^" => Operation::SymmetricDifference,
            _ => return Err(InputError::UnknownOperation(s.to_string())),
        };
        Ok(operation)
    }
}
