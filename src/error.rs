// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for set computations, input collection and configuration.
//!
//! None of the [`SetError`] variants are fatal: they tell the caller to skip
//! the diagram step (or the whole computation) and show a notice instead.

use crate::algebra::Operation;
use thiserror::Error;

/// Errors raised by the set algebra and region partitioning core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// An operation was applied to an empty list of sets.
    #[error("{operation} needs at least one set")]
    NoSets { operation: Operation },

    /// The operation does not accept this many sets.
    #[error("{operation} can only be applied to {expected} sets (got {actual})")]
    InvalidArity {
        operation: Operation,
        expected: usize,
        actual: usize,
    },

    /// Region partitioning was requested for a diagram size other than 2 or 3.
    #[error("Venn regions are only defined for 2 or 3 sets (got {actual})")]
    UnsupportedArity { actual: usize },

    /// A highlight was requested that has no meaning for this diagram size.
    #[error("{operation} cannot be highlighted on a diagram of {sets} sets")]
    NotApplicable { operation: Operation, sets: usize },
}

/// Errors raised while turning raw user input into named sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("set {name} has {count} elements (max {max})")]
    TooManyElements {
        name: String,
        count: usize,
        max: usize,
    },

    #[error("set #{position} has an empty name")]
    EmptyName { position: usize },

    #[error("set name {name} is used more than once")]
    DuplicateName { name: String },

    #[error("expected between {min} and {max} sets (got {actual})")]
    SetCount {
        min: usize,
        max: usize,
        actual: usize,
    },

    /// Sets were named but left without any elements.
    #[error("some sets are still missing elements: {}", .names.join(", "))]
    MissingSets { names: Vec<String> },

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("malformed set definition: {0}")]
    MalformedSet(String),
}

/// Errors raised while loading a limits file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid limits: {0}")]
    Invalid(String),
}
