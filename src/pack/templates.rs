//! Template documents stamped out once per texture.
//!
//! Every texture in the input folder becomes an entity, so each one gets an
//! entity behavior, a block behavior and a client entity definition.

use super::file_stems;
use crate::config::BuildConfig;
use crate::error::{PackError, Result};
use crate::json::write_json;
use crate::types::JSON_EXTENSION;
use serde_json::{json, Value};
use std::path::Path;
use tracing::{debug, info};

const ENTITY_BEHAVIOR: &str = include_str!("templates/entity_behavior.json");
const BLOCK_BEHAVIOR: &str = include_str!("templates/block_behavior.json");

/// Entity behavior document for `identifier`.
pub fn entity_behavior(identifier: &str) -> Result<Value> {
    let mut document: Value = serde_json::from_str(ENTITY_BEHAVIOR)?;
    set_description_identifier(&mut document, "minecraft:entity", identifier)?;
    Ok(document)
}

/// Block behavior document for `identifier`, with a placeholder
/// `netease:aabb` component covering one full block.
pub fn block_behavior(identifier: &str) -> Result<Value> {
    let mut document: Value = serde_json::from_str(BLOCK_BEHAVIOR)?;
    set_description_identifier(&mut document, "minecraft:block", identifier)?;
    Ok(document)
}

/// Client entity document rendering `name` with its geometry and texture.
pub fn client_entity(namespace: &str, name: &str, directory: &str) -> Value {
    json!({
        "format_version": "1.10.0",
        "minecraft:client_entity": {
            "description": {
                "geometry": {"default": format!("geometry.{}", name)},
                "identifier": format!("{}:{}", namespace, name),
                "materials": {"default": "entity_alphatest"},
                "render_controllers": ["controller.render.default"],
                "spawn_egg": {
                    "texture": format!("{}.egg", name),
                    "texture_index": 0
                },
                "textures": {
                    "default": format!("textures/entity/{}/{}", directory, name)
                }
            }
        }
    })
}

fn set_description_identifier(document: &mut Value, root: &str, identifier: &str) -> Result<()> {
    let description = document
        .get_mut(root)
        .and_then(|r| r.get_mut("description"))
        .and_then(Value::as_object_mut)
        .ok_or_else(|| PackError::InvalidDocument(format!("template has no {}.description", root)))?;
    description.insert("identifier".to_string(), Value::from(identifier));
    Ok(())
}

/// Write `<name>.json` entity behaviors into `output_dir` for every texture.
pub fn write_entity_behaviors(texture_dir: &Path, output_dir: &Path, config: &BuildConfig) -> Result<usize> {
    info!(dir = %output_dir.display(), "generating entity behaviors");
    std::fs::create_dir_all(output_dir)?;

    let names = file_stems(texture_dir)?;
    for name in &names {
        let document = entity_behavior(&format!("{}:{}", config.namespace, name))?;
        write_document(output_dir, name, &document)?;
    }
    Ok(names.len())
}

/// Write block behaviors into `output_dir`, named after the block form of
/// every texture name.
pub fn write_block_behaviors(texture_dir: &Path, output_dir: &Path, config: &BuildConfig) -> Result<usize> {
    info!(dir = %output_dir.display(), "generating block behaviors");
    std::fs::create_dir_all(output_dir)?;

    let naming = config.naming();
    let names = file_stems(texture_dir)?;
    for name in &names {
        let block_name = naming.block_name(name);
        let document = block_behavior(&format!("{}:{}", config.namespace, block_name))?;
        write_document(output_dir, &block_name, &document)?;
    }
    Ok(names.len())
}

/// Write client entity definitions into `output_dir` for every texture.
pub fn write_client_entities(texture_dir: &Path, output_dir: &Path, config: &BuildConfig) -> Result<usize> {
    info!(dir = %output_dir.display(), "generating client entities");
    std::fs::create_dir_all(output_dir)?;

    let names = file_stems(texture_dir)?;
    for name in &names {
        let document = client_entity(&config.namespace, name, &config.directory);
        write_document(output_dir, name, &document)?;
    }
    Ok(names.len())
}

fn write_document(dir: &Path, name: &str, document: &Value) -> Result<()> {
    let path = dir.join(format!("{}{}", name, JSON_EXTENSION));
    write_json(&path, document)?;
    debug!(path = %path.display(), "written");
    Ok(())
}
