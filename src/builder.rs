//! The full pack build.

use crate::aabb::{apply_bounds, BoundsReport};
use crate::config::BuildConfig;
use crate::error::{PackError, Result};
use crate::pack::{
    apply_affixes, copy_files, merge_blocks_index, merge_item_textures, merge_terrain_textures,
    rewrite_identifiers, strip_tokens, write_block_behaviors, write_client_entities,
    write_entity_behaviors, AssetKind, PackLayout, Rename,
};
use std::path::Path;
use tracing::info;

/// What a [`PackBuilder::run`] produced.
#[derive(Debug, Default)]
pub struct BuildSummary {
    /// Texture files renamed in the input folder.
    pub renamed_textures: Vec<Rename>,
    /// Geometry files renamed in the input folder.
    pub renamed_geometries: Vec<Rename>,
    /// Geometries whose identifier was rewritten.
    pub identifiers: usize,
    pub entity_behaviors: usize,
    pub block_behaviors: usize,
    pub client_entities: usize,
    /// Entries merged into `blocks.json`.
    pub block_entries: usize,
    /// Spawn egg entries merged into `item_texture.json`.
    pub item_texture_entries: usize,
    /// Block icon entries merged into `terrain_texture.json`.
    pub terrain_texture_entries: usize,
    pub copied_textures: usize,
    pub copied_geometries: usize,
    /// Per-geometry results of the bounding box step.
    pub bounds: BoundsReport,
}

/// Runs every generation stage for one texture folder and one geometry folder.
pub struct PackBuilder {
    config: BuildConfig,
}

impl PackBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: BuildConfig::default(),
        }
    }

    /// Create a builder with a custom configuration.
    pub fn with_config(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Layout of the pack tree under `build_root`.
    pub fn layout(&self, build_root: &Path) -> PackLayout {
        PackLayout::new(build_root, self.config.directory.as_str())
    }

    /// Build the add-on under `build_root`.
    ///
    /// The input folders are renamed in place before anything is generated,
    /// so generated names always match the copied assets.
    pub fn run(&self, build_root: &Path, texture_dir: &Path, geometry_dir: &Path) -> Result<BuildSummary> {
        self.config.validate()?;
        for dir in [texture_dir, geometry_dir] {
            if !dir.is_dir() {
                return Err(PackError::MissingDirectory(dir.to_path_buf()));
            }
        }

        let config = &self.config;
        let layout = self.layout(build_root);
        let mut summary = BuildSummary::default();

        layout.scaffold()?;

        summary.renamed_textures = self.normalize_names(texture_dir, AssetKind::Texture)?;
        summary.renamed_geometries = self.normalize_names(geometry_dir, AssetKind::Geometry)?;

        summary.identifiers = rewrite_identifiers(geometry_dir)?;

        summary.entity_behaviors = write_entity_behaviors(texture_dir, &layout.entity_behaviors(), config)?;
        summary.block_behaviors = write_block_behaviors(texture_dir, &layout.block_behaviors(), config)?;
        summary.client_entities = write_client_entities(texture_dir, &layout.client_entities(), config)?;

        summary.block_entries = merge_blocks_index(&layout.blocks_index(), texture_dir, config)?;
        summary.item_texture_entries = merge_item_textures(&layout.item_texture_index(), texture_dir)?;
        summary.terrain_texture_entries =
            merge_terrain_textures(&layout.terrain_texture_index(), texture_dir, config)?;

        summary.copied_textures = copy_files(texture_dir, &layout.textures())?;
        summary.copied_geometries = copy_files(geometry_dir, &layout.models())?;

        summary.bounds = apply_bounds(&layout.models(), &layout.block_behaviors(), &config.naming())?;

        info!(
            textures = summary.copied_textures,
            geometries = summary.copied_geometries,
            blocks = summary.block_behaviors,
            "pack build finished"
        );

        Ok(summary)
    }

    fn normalize_names(&self, dir: &Path, kind: AssetKind) -> Result<Vec<Rename>> {
        let mut renames = strip_tokens(dir, &self.config.strip_tokens)?;
        renames.extend(apply_affixes(dir, &self.config.prefix, &self.config.entity_suffix, kind)?);
        Ok(renames)
    }
}

impl Default for PackBuilder {
    fn default() -> Self {
        Self::new()
    }
}
