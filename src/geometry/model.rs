//! Geometry document parsing.
//!
//! Geometry documents describe an entity model as geometries made of bones,
//! and bones made of cubes. Only the fields needed for bounds are modeled;
//! everything else in the file is ignored.

use serde::{Deserialize, Serialize};

/// A parsed geometry document (`*.geo.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeometryDocument {
    /// All geometries in the file.
    #[serde(rename = "minecraft:geometry")]
    pub geometries: Vec<Geometry>,
}

/// A single geometry definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geometry {
    /// Bones in declaration order.
    pub bones: Vec<Bone>,
}

/// A bone owning a list of cubes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub cubes: Vec<Cube>,
}

/// An axis-aligned box in model-local units (16 units per block).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    /// Minimum corner.
    pub origin: [f64; 3],
    /// Extent along each axis.
    pub size: [f64; 3],
}

impl Cube {
    pub fn new(origin: [f64; 3], size: [f64; 3]) -> Self {
        Self { origin, size }
    }

    pub fn min(&self) -> [f64; 3] {
        self.origin
    }

    pub fn max(&self) -> [f64; 3] {
        [
            self.origin[0] + self.size[0],
            self.origin[1] + self.size[1],
            self.origin[2] + self.size[2],
        ]
    }
}

impl GeometryDocument {
    /// Iterate over every cube of every bone of every geometry.
    pub fn cubes(&self) -> impl Iterator<Item = &Cube> + '_ {
        self.geometries
            .iter()
            .flat_map(|geometry| geometry.bones.iter())
            .flat_map(|bone| bone.cubes.iter())
    }

    pub fn cube_count(&self) -> usize {
        self.cubes().count()
    }
}
