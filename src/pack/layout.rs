//! Directory layout of a generated add-on.

use crate::error::Result;
use crate::json::write_json;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const BEHAVIOR_PACK: &str = "behavior_pack";
pub const RESOURCE_PACK: &str = "resource_pack";
pub const ENTITIES: &str = "entities";
pub const NETEASE_BLOCKS: &str = "netease_blocks";
pub const ENTITY: &str = "entity";
pub const MODELS: &str = "models";
pub const TEXTURES: &str = "textures";

pub const BLOCKS_INDEX: &str = "blocks.json";
pub const ITEM_TEXTURE_INDEX: &str = "item_texture.json";
pub const TERRAIN_TEXTURE_INDEX: &str = "terrain_texture.json";

/// Paths of a behavior pack / resource pack pair under one build root.
///
/// `directory` groups the generated entity files, e.g.
/// `resource_pack/models/entity/<directory>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackLayout {
    root: PathBuf,
    directory: String,
}

impl PackLayout {
    pub fn new(root: impl Into<PathBuf>, directory: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            directory: directory.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn behavior_pack(&self) -> PathBuf {
        self.root.join(BEHAVIOR_PACK)
    }

    pub fn resource_pack(&self) -> PathBuf {
        self.root.join(RESOURCE_PACK)
    }

    /// `behavior_pack/entities/<dir>`
    pub fn entity_behaviors(&self) -> PathBuf {
        self.behavior_pack().join(ENTITIES).join(&self.directory)
    }

    /// `behavior_pack/netease_blocks`
    pub fn block_behaviors(&self) -> PathBuf {
        self.behavior_pack().join(NETEASE_BLOCKS)
    }

    /// `resource_pack/entity/<dir>`
    pub fn client_entities(&self) -> PathBuf {
        self.resource_pack().join(ENTITY).join(&self.directory)
    }

    /// `resource_pack/models/entity/<dir>`
    pub fn models(&self) -> PathBuf {
        self.resource_pack().join(MODELS).join(ENTITY).join(&self.directory)
    }

    /// `resource_pack/textures/entity/<dir>`
    pub fn textures(&self) -> PathBuf {
        self.resource_pack().join(TEXTURES).join(ENTITY).join(&self.directory)
    }

    pub fn blocks_index(&self) -> PathBuf {
        self.resource_pack().join(BLOCKS_INDEX)
    }

    pub fn item_texture_index(&self) -> PathBuf {
        self.resource_pack().join(TEXTURES).join(ITEM_TEXTURE_INDEX)
    }

    pub fn terrain_texture_index(&self) -> PathBuf {
        self.resource_pack().join(TEXTURES).join(TERRAIN_TEXTURE_INDEX)
    }

    /// Every directory the pipeline writes into.
    pub fn directories(&self) -> [PathBuf; 5] {
        [
            self.entity_behaviors(),
            self.block_behaviors(),
            self.client_entities(),
            self.models(),
            self.textures(),
        ]
    }

    /// Create the directory tree and seed the index documents.
    ///
    /// Existing directories and index files are left as they are, so running
    /// this on a previous build only fills in what is missing.
    pub fn scaffold(&self) -> Result<()> {
        info!(root = %self.root.display(), "creating pack directories");

        for dir in self.directories() {
            std::fs::create_dir_all(&dir)?;
        }

        let seeds = [
            (self.blocks_index(), json!({"format_version": [1, 1, 0]})),
            (
                self.item_texture_index(),
                json!({
                    "resource_pack_name": "vanilla",
                    "texture_data": {},
                    "texture_name": "atlas.items"
                }),
            ),
            (
                self.terrain_texture_index(),
                json!({
                    "resource_pack_name": "vanilla",
                    "texture_data": {},
                    "texture_name": "atlas.terrain"
                }),
            ),
        ];

        for (path, document) in seeds {
            if path.exists() {
                continue;
            }
            write_json(&path, &document)?;
            debug!(path = %path.display(), "index seeded");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::read_json;

    #[test]
    fn test_layout_paths() {
        let layout = PackLayout::new("/build", "drinkBlock");
        assert_eq!(
            layout.entity_behaviors(),
            Path::new("/build/behavior_pack/entities/drinkBlock")
        );
        assert_eq!(
            layout.block_behaviors(),
            Path::new("/build/behavior_pack/netease_blocks")
        );
        assert_eq!(
            layout.models(),
            Path::new("/build/resource_pack/models/entity/drinkBlock")
        );
        assert_eq!(
            layout.terrain_texture_index(),
            Path::new("/build/resource_pack/textures/terrain_texture.json")
        );
    }

    #[test]
    fn test_scaffold_creates_tree() {
        let root = tempfile::tempdir().unwrap();
        let layout = PackLayout::new(root.path(), "drinkBlock");
        layout.scaffold().unwrap();

        for dir in layout.directories() {
            assert!(dir.is_dir(), "{:?} missing", dir);
        }

        let blocks = read_json(layout.blocks_index()).unwrap();
        assert_eq!(blocks, json!({"format_version": [1, 1, 0]}));
        let items = read_json(layout.item_texture_index()).unwrap();
        assert_eq!(items["texture_name"], "atlas.items");
        let terrain = read_json(layout.terrain_texture_index()).unwrap();
        assert_eq!(terrain["texture_name"], "atlas.terrain");
    }

    #[test]
    fn test_scaffold_keeps_existing_index() {
        let root = tempfile::tempdir().unwrap();
        let layout = PackLayout::new(root.path(), "drinkBlock");
        layout.scaffold().unwrap();

        let custom = json!({"format_version": [1, 1, 0], "ecx:old_block": {"sound": "wood"}});
        write_json(layout.blocks_index(), &custom).unwrap();

        layout.scaffold().unwrap();
        assert_eq!(read_json(layout.blocks_index()).unwrap(), custom);
    }
}
