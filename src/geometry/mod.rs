// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for Venn diagrams.
//!
//! - Curve: one closed curve per input set (0..MAX_CURVES)
//! - RegionId: bitset of curves naming one atomic region

pub mod region;

pub use region::{Curve, RegionId, MAX_CURVES};
