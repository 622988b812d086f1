// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Curves and atomic Venn regions.
//!
//! Each input set is drawn as one closed curve, numbered by the position
//! the set was supplied in. An atomic region is the part of the diagram inside exactly a given subset
//! of the curves. It is stored as a bitset where bit k is set if the region
//! lies inside curve k, together with the number of curves in the diagram.
//!
//! The textual form is a bit-string with one character per curve, in curve
//! order, so for three sets `"110"` is "inside the first and second set, not
//! the third".
//!
//! # Examples
//!
//! ```
//! use venn_sets::geometry::{Curve, RegionId};
//!
//! let mut region = RegionId::outside(3);
//! region.insert(Curve::new(0));
//! region.insert(Curve::new(1));
//!
//! assert_eq!(region.to_string(), "110");
//! assert_eq!("110".parse::<RegionId>().unwrap(), region);
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Maximum number of curves a diagram can have.
pub const MAX_CURVES: usize = 3;

/// Position of an input set in the diagram, below [`MAX_CURVES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Curve(u8);

impl Curve {
    /// # Panics
    ///
    /// Panics if `position >= MAX_CURVES`.
    pub fn new(position: u8) -> Self {
        assert!((position as usize) < MAX_CURVES, "Curve out of range: {}", position);
        Self(position)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Index of the input set drawn as this curve.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The first `arity` curves in positional order.
    pub fn all(arity: usize) -> impl Iterator<Item = Curve> {
        (0..arity.min(MAX_CURVES) as u8).map(Curve)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId {
    bits: u8,
    arity: u8,
}

impl RegionId {
    /// The (non-region) pattern lying outside every curve.
    ///
    /// # Panics
    ///
    /// Panics if `arity > MAX_CURVES`.
    pub fn outside(arity: usize) -> Self {
        assert!(arity <= MAX_CURVES, "Arity out of range: {}", arity);
        Self {
            bits: 0,
            arity: arity as u8,
        }
    }

    /// Create a region from a raw bitmask, returning None if the mask names
    /// a curve beyond `arity`.
    pub fn from_bits(bits: u8, arity: usize) -> Option<Self> {
        if arity > MAX_CURVES || (bits as usize) >> arity != 0 {
            return None;
        }
        Some(Self {
            bits,
            arity: arity as u8,
        })
    }

    /// Check if the region lies inside a curve.
    pub fn contains(self, curve: Curve) -> bool {
        (self.bits >> curve.value()) & 1 != 0
    }

    pub fn insert(&mut self, curve: Curve) {
        debug_assert!(curve.as_usize() < self.arity());
        self.bits |= 1 << curve.value();
    }

    /// Number of curves the region is inside.
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True for the outside pattern, which is never an atomic region.
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn bits(self) -> u8 {
        self.bits
    }

    /// Number of curves in the diagram this region belongs to.
    pub fn arity(self) -> usize {
        self.arity as usize
    }

    /// Iterate over the curves containing this region, in ascending order.
    pub fn curves(self) -> impl Iterator<Item = Curve> {
        Curve::all(self.arity()).filter(move |&c| self.contains(c))
    }

    /// All `2^arity - 1` atomic regions of a diagram, in display order:
    /// regions inside one curve first, then two, then three; ties in curve
    /// order.
    pub fn all(arity: usize) -> Vec<RegionId> {
        let arity = arity.min(MAX_CURVES);
        let mut regions: Vec<RegionId> = (1..(1u8 << arity))
            .filter_map(|bits| RegionId::from_bits(bits, arity))
            .collect();
        regions.sort_by_key(|r| (r.len(), r.bits));
        regions
    }
}

impl fmt::Display for RegionId {
    /// Format as a bit-string, e.g. "101".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for curve in Curve::all(self.arity()) {
            write!(f, "{}", if self.contains(curve) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for RegionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let arity = s.chars().count();
        if arity == 0 || arity > MAX_CURVES {
            return Err(format!("region id must have 1..={} digits: {:?}", MAX_CURVES, s));
        }
        let mut region = RegionId::outside(arity);
        for (k, ch) in s.chars().enumerate() {
            match ch {
                '1' => region.insert(Curve::new(k as u8)),
                '0' => {}
                _ => return Err(format!("region id must be a bit-string: {:?}", s)),
            }
        }
        Ok(region)
    }
}

impl Serialize for RegionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
