//! Shared types used throughout the library.

mod naming;

pub use naming::{strip_geometry_marker, SuffixNaming, TargetNaming, GEOMETRY_MARKER, JSON_EXTENSION};

use glam::DVec3;

/// Model-local units per block (one unit is 1/16 of a block).
pub const UNITS_PER_BLOCK: f64 = 16.0;

/// Lower limit for any component of a block-space box.
pub const BLOCK_BOX_MIN: f64 = -1.0;

/// Upper limit for any component of a block-space box.
pub const BLOCK_BOX_MAX: f64 = 2.0;

const UNIT_SCALE: f64 = 1.0 / UNITS_PER_BLOCK;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl BoundingBox {
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    /// A box that contains nothing: `min` is `+inf` and `max` is `-inf` on
    /// every axis, so the first [`include`](Self::include) replaces it.
    pub fn empty() -> Self {
        Self {
            min: [f64::INFINITY; 3],
            max: [f64::NEG_INFINITY; 3],
        }
    }

    /// True while nothing has been folded into the box.
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.min[i] > self.max[i])
    }

    /// Grow the box to cover the extent `[min, max]`.
    pub fn include(&mut self, min: [f64; 3], max: [f64; 3]) {
        self.min = DVec3::from_array(self.min).min(DVec3::from_array(min)).to_array();
        self.max = DVec3::from_array(self.max).max(DVec3::from_array(max)).to_array();
    }

    /// Convert a box in model-local units to block units.
    ///
    /// The engine mirrors the X axis, so X is negated and its min/max swap
    /// roles. Y and Z are only scaled.
    pub fn to_block_space(&self) -> Self {
        let min = DVec3::from_array(self.min) * UNIT_SCALE;
        let max = DVec3::from_array(self.max) * UNIT_SCALE;

        Self {
            min: DVec3::new(-max.x, min.y, min.z).to_array(),
            max: DVec3::new(-min.x, max.y, max.z).to_array(),
        }
    }

    /// Clamp every component into `[BLOCK_BOX_MIN, BLOCK_BOX_MAX]`.
    pub fn clamped(&self) -> Self {
        Self {
            min: self.min.map(clamp_component),
            max: self.max.map(clamp_component),
        }
    }
}

/// Clamp a single block-space coordinate. Negative zero comes out as `0.0`.
pub fn clamp_component(value: f64) -> f64 {
    let clamped = value.clamp(BLOCK_BOX_MIN, BLOCK_BOX_MAX);
    if clamped == 0.0 {
        0.0
    } else {
        clamped
    }
}
