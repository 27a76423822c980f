//! Geometry documents and their bounds.

pub mod model;

pub use model::{Bone, Cube, Geometry, GeometryDocument};

use crate::error::BoundsFailure;
use crate::types::BoundingBox;

impl GeometryDocument {
    /// Union of every cube's extent, in model-local units.
    ///
    /// A document without cubes yields [`BoundingBox::empty`].
    pub fn bounds(&self) -> BoundingBox {
        let mut bounds = BoundingBox::empty();
        for cube in self.cubes() {
            bounds.include(cube.min(), cube.max());
        }
        bounds
    }
}

/// Parse a geometry document from JSON text.
pub fn parse_geometry(contents: &str) -> Result<GeometryDocument, BoundsFailure> {
    serde_json::from_str(contents).map_err(|e| BoundsFailure::MalformedGeometry(e.to_string()))
}

/// Parse a geometry document and compute its bounds.
pub fn extract_bounds(contents: &str) -> Result<BoundingBox, BoundsFailure> {
    Ok(parse_geometry(contents)?.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(geometries: Vec<Vec<Vec<Cube>>>) -> GeometryDocument {
        GeometryDocument {
            geometries: geometries
                .into_iter()
                .map(|bones| Geometry {
                    bones: bones
                        .into_iter()
                        .map(|cubes| Bone { name: None, cubes })
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_single_full_block() {
        let doc = document(vec![vec![vec![Cube::new([0.0; 3], [16.0; 3])]]]);
        let bounds = doc.bounds();
        assert_eq!(bounds.min, [0.0, 0.0, 0.0]);
        assert_eq!(bounds.max, [16.0, 16.0, 16.0]);
    }

    #[test]
    fn test_bounds_span_geometries_and_bones() {
        let doc = document(vec![
            vec![
                vec![Cube::new([-4.0, 0.0, 0.0], [2.0, 2.0, 2.0])],
                vec![Cube::new([0.0, 8.0, 0.0], [1.0, 1.0, 1.0])],
            ],
            vec![vec![Cube::new([3.0, -1.0, 5.0], [0.0, 1.0, 3.0])]],
        ]);
        let bounds = doc.bounds();

        assert_eq!(bounds.min, [-4.0, -1.0, 0.0]);
        assert_eq!(bounds.max, [3.0, 9.0, 8.0]);
        for i in 0..3 {
            assert!(bounds.min[i] <= bounds.max[i]);
        }
    }

    #[test]
    fn test_bounds_are_order_independent() {
        let a = Cube::new([-4.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
        let b = Cube::new([0.0, 8.0, 0.0], [1.0, 1.0, 1.0]);
        let c = Cube::new([3.0, -1.0, 5.0], [0.0, 1.0, 3.0]);

        let forward = document(vec![vec![vec![a, b]], vec![vec![c]]]).bounds();
        let shuffled = document(vec![vec![vec![c], vec![b]], vec![vec![a]]]).bounds();
        let reversed = document(vec![vec![vec![c, b, a]]]).bounds();

        assert_eq!(forward, shuffled);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_empty_document_keeps_sentinels() {
        let doc = document(vec![vec![vec![]]]);
        let bounds = doc.bounds();
        assert!(bounds.is_empty());
        assert_eq!(bounds, BoundingBox::empty());
    }

    #[test]
    fn test_extract_bounds_malformed() {
        let result = extract_bounds(r#"{"minecraft:geometry": [{"cubes": []}]}"#);
        assert!(matches!(result, Err(BoundsFailure::MalformedGeometry(_))));

        let result = extract_bounds("not json");
        assert!(matches!(result, Err(BoundsFailure::MalformedGeometry(_))));
    }

    #[test]
    fn test_extract_bounds_from_json() {
        let json = r#"{"minecraft:geometry": [{"bones": [{"cubes": [
            {"origin": [-32, 0, 0], "size": [16, 16, 16]}
        ]}]}]}"#;
        let bounds = extract_bounds(json).unwrap();
        assert_eq!(bounds.max[0], -16.0);
        assert_eq!(bounds.to_block_space().min[0], 1.0);
    }
}
