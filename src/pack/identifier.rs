//! Geometry identifiers.
//!
//! A geometry is referenced by client entities as `geometry.<name>`, where
//! `<name>` is its file name without `.geo.json`. After renaming, every
//! geometry's `description.identifier` is rewritten to match.

use super::list_files;
use crate::error::{PackError, Result};
use crate::json::{read_json, write_json};
use crate::types::{strip_geometry_marker, JSON_EXTENSION};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info, warn};

/// "drinks_cola_entity.geo" -> "geometry.drinks_cola_entity"
pub fn geometry_identifier(stem: &str) -> String {
    format!("geometry.{}", strip_geometry_marker(stem))
}

/// Rewrite the identifiers of every `*.json` geometry in `dir`.
///
/// Files that are not geometry documents are logged and skipped. Returns the
/// number of files rewritten.
pub fn rewrite_identifiers(dir: &Path) -> Result<usize> {
    info!(dir = %dir.display(), "updating geometry identifiers");

    let mut rewritten = 0;
    for path in list_files(dir)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let Some(stem) = name.strip_suffix(JSON_EXTENSION) else {
            continue;
        };

        let identifier = geometry_identifier(stem);
        match rewrite_file(&path, &identifier) {
            Ok(()) => {
                debug!(file = %name, identifier = %identifier, "geometry identifier set");
                rewritten += 1;
            }
            Err(e) => warn!(file = %name, "geometry identifier not updated: {}", e),
        }
    }
    Ok(rewritten)
}

fn rewrite_file(path: &Path, identifier: &str) -> Result<()> {
    let mut document = read_json(path)?;
    set_identifier(&mut document, identifier)?;
    write_json(path, &document)
}

/// Set `description.identifier` on every entry of `minecraft:geometry`.
pub fn set_identifier(document: &mut Value, identifier: &str) -> Result<()> {
    let geometries = document
        .get_mut("minecraft:geometry")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| PackError::InvalidDocument("no \"minecraft:geometry\" list".to_string()))?;

    for geometry in geometries {
        let geometry = geometry
            .as_object_mut()
            .ok_or_else(|| PackError::InvalidDocument("geometry is not an object".to_string()))?;
        let description = geometry
            .entry("description")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| {
                PackError::InvalidDocument("geometry description is not an object".to_string())
            })?;
        description.insert("identifier".to_string(), Value::from(identifier));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_geometry_identifier() {
        assert_eq!(geometry_identifier("drinks_cola_entity.geo"), "geometry.drinks_cola_entity");
        assert_eq!(geometry_identifier("plain"), "geometry.plain");
    }

    #[test]
    fn test_set_identifier_keeps_other_fields() {
        let mut doc = json!({
            "format_version": "1.12.0",
            "minecraft:geometry": [
                {
                    "description": {"identifier": "geometry.unknown", "texture_width": 64},
                    "bones": []
                },
                {"bones": []}
            ]
        });

        set_identifier(&mut doc, "geometry.cola").unwrap();
        assert_eq!(doc["minecraft:geometry"][0]["description"]["identifier"], "geometry.cola");
        assert_eq!(doc["minecraft:geometry"][0]["description"]["texture_width"], 64);
        assert_eq!(doc["minecraft:geometry"][1]["description"]["identifier"], "geometry.cola");
        assert_eq!(doc["format_version"], "1.12.0");
    }

    #[test]
    fn test_rewrite_identifiers_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("drinks_cola_entity.geo.json"),
            r#"{"minecraft:geometry": [{"description": {"identifier": "geometry.x"}, "bones": []}]}"#,
        )
        .unwrap();
        fs::write(dir.path().join("broken.geo.json"), r#"{"other": 1}"#).unwrap();
        fs::write(dir.path().join("readme.txt"), "skip").unwrap();

        let count = rewrite_identifiers(dir.path()).unwrap();
        assert_eq!(count, 1);

        let doc = read_json(dir.path().join("drinks_cola_entity.geo.json")).unwrap();
        assert_eq!(
            doc["minecraft:geometry"][0]["description"]["identifier"],
            "geometry.drinks_cola_entity"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("broken.geo.json")).unwrap(),
            r#"{"other": 1}"#
        );
    }
}
