//! Add-on generation stages.
//!
//! Each stage works on plain directories: renaming input assets, stamping
//! template documents, merging index files and copying assets into the pack
//! tree laid out by [`PackLayout`].

pub mod copy;
pub mod identifier;
pub mod index;
pub mod layout;
pub mod rename;
pub mod templates;

pub use copy::copy_files;
pub use identifier::{geometry_identifier, rewrite_identifiers};
pub use index::{merge_blocks_index, merge_item_textures, merge_terrain_textures};
pub use layout::PackLayout;
pub use rename::{apply_affixes, strip_tokens, AssetKind, Rename};
pub use templates::{write_block_behaviors, write_client_entities, write_entity_behaviors};

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Regular files directly inside `dir`, sorted by path.
pub(crate) fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// File name without its last extension ("cola_entity.png" -> "cola_entity").
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Stems of every regular file in `dir`, sorted.
pub(crate) fn file_stems(dir: &Path) -> Result<Vec<String>> {
    Ok(list_files(dir)?.iter().map(|p| file_stem(p)).collect())
}
