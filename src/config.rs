// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Input limits.
//!
//! Limits can be loaded from a TOML file; any key left out keeps its
//! default:
//!
//! ```toml
//! max_elements = 15
//! min_sets = 2
//! max_sets = 10
//! label_elements = 3
//! ```

use crate::algebra::ordering::LABEL_ELEMENTS;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Limits applied by the input layer and the diagram labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Largest number of distinct elements a single set may hold.
    pub max_elements: usize,
    pub min_sets: usize,
    pub max_sets: usize,
    /// Elements listed inside a diagram region before truncation.
    pub label_elements: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_elements: 15,
            min_sets: 2,
            max_sets: 10,
            label_elements: LABEL_ELEMENTS,
        }
    }
}

impl Limits {
    /// Parse limits from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let limits: Limits = toml::from_str(text)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Load limits from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_sets == 0 || self.min_sets > self.max_sets {
            return Err(ConfigError::Invalid(format!(
                "set range {}..={} is empty",
                self.min_sets, self.max_sets
            )));
        }
        Ok(())
    }
}
