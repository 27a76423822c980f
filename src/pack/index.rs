//! Merging generated entries into the shared index documents.
//!
//! `blocks.json`, `item_texture.json` and `terrain_texture.json` are shared by
//! the whole resource pack. Entries for the current textures are inserted or
//! replaced; everything else in the file is kept.

use super::file_stems;
use crate::config::BuildConfig;
use crate::error::{PackError, Result};
use crate::json::{read_json, write_json};
use serde_json::{json, Map, Value};
use std::path::Path;
use tracing::info;

/// Folder the spawn egg and block icon textures are referenced from.
pub const EGG_TEXTURE_DIR: &str = "textures/items/egg";

/// Add a `blocks.json` entry rendering each block with its client entity.
pub fn merge_blocks_index(index: &Path, texture_dir: &Path, config: &BuildConfig) -> Result<usize> {
    info!(index = %index.display(), "updating block index");
    let naming = config.naming();

    let mut document = read_json(index)?;
    let root = as_object(&mut document, index)?;

    let names = file_stems(texture_dir)?;
    for name in &names {
        let identifier = format!("{}:{}", config.namespace, name);
        let block_icon = naming.block_name(&identifier);
        let entry = json!({
            "client_entity": {
                "hand_model_use_client_entity": true,
                "identifier": identifier,
                "block_icon": block_icon
            },
            "sound": "metal"
        });
        root.insert(format!("{}:{}", config.namespace, naming.block_name(name)), entry);
    }

    write_json(index, &document)?;
    Ok(names.len())
}

/// Register each texture's spawn egg as `<name>.egg` in `item_texture.json`.
pub fn merge_item_textures(index: &Path, texture_dir: &Path) -> Result<usize> {
    info!(index = %index.display(), "updating item texture atlas");

    let mut document = read_json(index)?;
    let atlas = texture_data(&mut document, index)?;

    let names = file_stems(texture_dir)?;
    for name in &names {
        atlas.insert(format!("{}.egg", name), egg_texture(name));
    }

    write_json(index, &document)?;
    Ok(names.len())
}

/// Register each block icon in `terrain_texture.json`.
pub fn merge_terrain_textures(index: &Path, texture_dir: &Path, config: &BuildConfig) -> Result<usize> {
    info!(index = %index.display(), "updating terrain texture atlas");
    let naming = config.naming();

    let mut document = read_json(index)?;
    let atlas = texture_data(&mut document, index)?;

    let names = file_stems(texture_dir)?;
    for name in &names {
        let key = format!("{}:{}", config.namespace, naming.block_name(name));
        atlas.insert(key, egg_texture(name));
    }

    write_json(index, &document)?;
    Ok(names.len())
}

fn egg_texture(name: &str) -> Value {
    json!({"textures": format!("{}/{}", EGG_TEXTURE_DIR, name)})
}

fn as_object<'a>(document: &'a mut Value, path: &Path) -> Result<&'a mut Map<String, Value>> {
    document
        .as_object_mut()
        .ok_or_else(|| PackError::InvalidDocument(format!("{} is not a JSON object", path.display())))
}

/// The `texture_data` object of an atlas index, created when missing.
fn texture_data<'a>(document: &'a mut Value, path: &Path) -> Result<&'a mut Map<String, Value>> {
    as_object(document, path)?
        .entry("texture_data")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| {
            PackError::InvalidDocument(format!("{}: texture_data is not an object", path.display()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::PackLayout;
    use std::fs;
    use std::path::PathBuf;

    fn setup() -> (tempfile::TempDir, PackLayout, PathBuf) {
        let root = tempfile::tempdir().unwrap();
        let layout = PackLayout::new(root.path().join("build"), "drinkBlock");
        layout.scaffold().unwrap();

        let textures = root.path().join("textures");
        fs::create_dir(&textures).unwrap();
        fs::write(textures.join("drinks_cola_entity.png"), b"").unwrap();
        (root, layout, textures)
    }

    #[test]
    fn test_blocks_index() {
        let (_root, layout, textures) = setup();
        let config = BuildConfig::default();

        merge_blocks_index(&layout.blocks_index(), &textures, &config).unwrap();
        let doc = read_json(layout.blocks_index()).unwrap();

        assert_eq!(doc["format_version"], json!([1, 1, 0]));
        let entry = &doc["ecx:drinks_cola_block"];
        assert_eq!(entry["sound"], "metal");
        assert_eq!(entry["client_entity"]["identifier"], "ecx:drinks_cola_entity");
        assert_eq!(entry["client_entity"]["block_icon"], "ecx:drinks_cola_block");
        assert_eq!(entry["client_entity"]["hand_model_use_client_entity"], true);
    }

    #[test]
    fn test_item_textures() {
        let (_root, layout, textures) = setup();

        merge_item_textures(&layout.item_texture_index(), &textures).unwrap();
        let doc = read_json(layout.item_texture_index()).unwrap();

        assert_eq!(
            doc["texture_data"]["drinks_cola_entity.egg"]["textures"],
            "textures/items/egg/drinks_cola_entity"
        );
        assert_eq!(doc["texture_name"], "atlas.items");
    }

    #[test]
    fn test_terrain_textures_creates_texture_data() {
        let (_root, layout, textures) = setup();
        write_json(layout.terrain_texture_index(), &json!({"texture_name": "atlas.terrain"})).unwrap();

        merge_terrain_textures(&layout.terrain_texture_index(), &textures, &BuildConfig::default())
            .unwrap();
        let doc = read_json(layout.terrain_texture_index()).unwrap();

        assert_eq!(
            doc["texture_data"]["ecx:drinks_cola_block"]["textures"],
            "textures/items/egg/drinks_cola_entity"
        );
    }

    #[test]
    fn test_existing_entries_survive() {
        let (_root, layout, textures) = setup();
        write_json(
            layout.item_texture_index(),
            &json!({"texture_data": {"old.egg": {"textures": "textures/items/egg/old"}}}),
        )
        .unwrap();

        merge_item_textures(&layout.item_texture_index(), &textures).unwrap();
        let doc = read_json(layout.item_texture_index()).unwrap();
        let data = doc["texture_data"].as_object().unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.contains_key("old.egg"));
    }

    #[test]
    fn test_non_object_index() {
        let (_root, layout, textures) = setup();
        write_json(layout.blocks_index(), &json!([1, 2])).unwrap();

        let result = merge_blocks_index(&layout.blocks_index(), &textures, &BuildConfig::default());
        assert!(matches!(result, Err(PackError::InvalidDocument(_))));
    }
}
