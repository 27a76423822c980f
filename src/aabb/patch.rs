//! Writing a bounding box into a block definition document.
//!
//! The document is only decoded along the path to the aabb regions. Every
//! other value is held as raw JSON text and written back exactly as it was
//! read, so numbers keep their spelling and strings keep their escapes.

use crate::error::BoundsFailure;
use crate::json::to_pretty_string;
use crate::types::BoundingBox;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::Value;
use std::fmt;

/// Top-level key of a block definition.
pub const BLOCK_KEY: &str = "minecraft:block";

/// Component holding the clip and collision boxes.
pub const AABB_COMPONENT: &str = "netease:aabb";

/// Regions of the aabb component that receive the box.
pub const AABB_REGIONS: [&str; 2] = ["clip", "collision"];

/// Result of patching a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The four box vectors were overwritten; holds the new document text.
    Patched(String),
    /// The document has no `minecraft:block` key and was not touched.
    NotABlock,
}

/// Overwrite `clip.min`, `clip.max`, `collision.min` and `collision.max`
/// under `minecraft:block.components."netease:aabb"` in the document `text`.
///
/// Nothing else in the document changes, and existing keys keep their
/// position.
pub fn patch_block_aabb(text: &str, bounds: &BoundingBox) -> Result<PatchOutcome, BoundsFailure> {
    let raw: Box<RawValue> = serde_json::from_str(text).map_err(malformed)?;
    let Some(mut root) = RawObject::parse(&raw) else {
        return Ok(PatchOutcome::NotABlock);
    };
    let Some(block) = root.get_mut(BLOCK_KEY) else {
        return Ok(PatchOutcome::NotABlock);
    };

    let aabb = block
        .as_object_mut()
        .and_then(|block| block.get_mut("components"))
        .and_then(Node::as_object_mut)
        .and_then(|components| components.get_mut(AABB_COMPONENT))
        .and_then(Node::as_object_mut)
        .ok_or_else(|| {
            BoundsFailure::MalformedTarget(format!(
                "{} has no components.\"{}\" object",
                BLOCK_KEY, AABB_COMPONENT
            ))
        })?;

    for region in AABB_REGIONS {
        let region_box = aabb
            .get_mut(region)
            .and_then(Node::as_object_mut)
            .ok_or_else(|| {
                BoundsFailure::MalformedTarget(format!(
                    "\"{}\" has no \"{}\" object",
                    AABB_COMPONENT, region
                ))
            })?;
        region_box.insert("min", Node::Value(vector(bounds.min)));
        region_box.insert("max", Node::Value(vector(bounds.max)));
    }

    let output = to_pretty_string(&root).map_err(malformed)?;
    Ok(PatchOutcome::Patched(output))
}

fn malformed(e: serde_json::Error) -> BoundsFailure {
    BoundsFailure::MalformedTarget(e.to_string())
}

fn vector(components: [f64; 3]) -> Value {
    Value::Array(components.iter().map(|&c| Value::from(c)).collect())
}

/// A JSON value that is decoded lazily.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Node {
    Raw(Box<RawValue>),
    Object(RawObject),
    Value(Value),
}

impl Node {
    /// Decode a raw object in place. `None` when the value is not an object.
    fn as_object_mut(&mut self) -> Option<&mut RawObject> {
        if let Node::Raw(raw) = self {
            let object = RawObject::parse(raw)?;
            *self = Node::Object(object);
        }
        match self {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }
}

/// Object members in document order, values left undecoded.
#[derive(Debug, Default)]
struct RawObject {
    entries: Vec<(String, Node)>,
}

impl RawObject {
    fn parse(raw: &RawValue) -> Option<Self> {
        serde_json::from_str(raw.get()).ok()
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == key)
            .map(|(_, node)| node)
    }

    fn insert(&mut self, key: &str, node: Node) {
        match self.entries.iter().position(|(name, _)| name == key) {
            Some(index) => self.entries[index].1 = node,
            None => self.entries.push((key.to_string(), node)),
        }
    }
}

impl<'de> Deserialize<'de> for RawObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ObjectVisitor;

        impl<'de> Visitor<'de> for ObjectVisitor {
            type Value = RawObject;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawObject, A::Error> {
                let mut entries = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, Box<RawValue>>()? {
                    entries.push((key, Node::Raw(value)));
                }
                Ok(RawObject { entries })
            }
        }

        deserializer.deserialize_map(ObjectVisitor)
    }
}

impl Serialize for RawObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}
