//! Normalizing input asset file names.
//!
//! Input folders are renamed in place: unwanted tokens are stripped first,
//! then the configured prefix and entity suffix are applied. Geometry files
//! keep (or gain) their `.geo` marker in front of the extension.

use super::list_files;
use crate::error::Result;
use crate::types::GEOMETRY_MARKER;
use std::path::Path;
use tracing::{debug, info, warn};

/// The kind of asset a folder holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Texture,
    Geometry,
}

/// A file that was renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

/// Remove every occurrence of each token from the file names in `dir`.
///
/// Tokens are applied in order. A file is skipped when its new name is
/// already taken.
pub fn strip_tokens(dir: &Path, tokens: &[String]) -> Result<Vec<Rename>> {
    info!(dir = %dir.display(), "stripping name tokens");

    let mut renames = Vec::new();
    for path in list_files(dir)? {
        let name = file_name(&path);
        let stripped = tokens
            .iter()
            .filter(|token| !token.is_empty())
            .fold(name.clone(), |acc, token| acc.replace(token.as_str(), ""));

        if let Some(rename) = rename_in(dir, name, stripped)? {
            renames.push(rename);
        }
    }
    Ok(renames)
}

/// Rename every file in `dir` to `prefix + stem + suffix [+ ".geo"] + ext`.
pub fn apply_affixes(dir: &Path, prefix: &str, suffix: &str, kind: AssetKind) -> Result<Vec<Rename>> {
    info!(dir = %dir.display(), ?kind, "applying name prefix and suffix");

    let mut renames = Vec::new();
    for path in list_files(dir)? {
        let name = file_name(&path);
        let new_name = affixed_name(&name, prefix, suffix, kind);

        if let Some(rename) = rename_in(dir, name, new_name)? {
            renames.push(rename);
        }
    }
    Ok(renames)
}

/// "cola.geo.json" -> "drinks_cola_entity.geo.json" for geometry,
/// "cola.png" -> "drinks_cola_entity.png" for textures.
pub fn affixed_name(name: &str, prefix: &str, suffix: &str, kind: AssetKind) -> String {
    let (stem, extension) = split_extension(name);
    let stem = stem.replace(GEOMETRY_MARKER, "");
    match kind {
        AssetKind::Geometry => format!("{}{}{}{}{}", prefix, stem, suffix, GEOMETRY_MARKER, extension),
        AssetKind::Texture => format!("{}{}{}{}", prefix, stem, suffix, extension),
    }
}

/// Split off the last extension, keeping its dot. Leading dots belong to the
/// stem: ".hidden" has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(index) => name.split_at(leading + index),
        None => (name, ""),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn rename_in(dir: &Path, from: String, to: String) -> Result<Option<Rename>> {
    if from == to {
        return Ok(None);
    }

    let target = dir.join(&to);
    if target.exists() {
        warn!(from = %from, to = %to, "rename skipped, name already taken");
        return Ok(None);
    }

    std::fs::rename(dir.join(&from), &target)?;
    debug!(from = %from, to = %to, "renamed");
    Ok(Some(Rename { from, to }))
}
