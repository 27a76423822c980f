//! Block bounding boxes derived from geometry.
//!
//! For every geometry file in a model directory the union of its cubes is
//! converted to block space and written into the `netease:aabb` component of
//! the matching block definition. Files are independent: a broken geometry or
//! a missing block definition is recorded in the [`BoundsReport`] and the run
//! moves on to the next file.

pub mod patch;
pub mod report;

pub use patch::{patch_block_aabb, PatchOutcome, AABB_COMPONENT, BLOCK_KEY};
pub use report::{BoundsEntry, BoundsOutcome, BoundsReport};

use crate::error::{BoundsFailure, Result};
use crate::geometry::parse_geometry;
use crate::types::{strip_geometry_marker, BoundingBox, TargetNaming, JSON_EXTENSION};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Apply geometry bounds from `source_dir` to block definitions in `target_dir`.
///
/// Only an unreadable `source_dir` fails the call; everything that goes wrong
/// with a single file ends up in the report.
pub fn apply_bounds<N>(source_dir: &Path, target_dir: &Path, naming: &N) -> Result<BoundsReport>
where
    N: TargetNaming + ?Sized,
{
    info!(
        models = %source_dir.display(),
        blocks = %target_dir.display(),
        "adjusting block bounding boxes"
    );

    let mut report = BoundsReport::new();

    for (source, stem) in geometry_files(source_dir)? {
        let target = target_dir.join(format!("{}{}", naming.target_stem(&stem), JSON_EXTENSION));

        let outcome = match apply_file(&source, &target) {
            Ok(PatchResult::Patched(bounds)) => {
                debug!(block = %target.display(), min = ?bounds.min, max = ?bounds.max, "bounding box written");
                BoundsOutcome::Patched(bounds)
            }
            Ok(PatchResult::NotABlock) => {
                debug!(block = %target.display(), "not a block definition, left unchanged");
                BoundsOutcome::Unchanged
            }
            Err(failure) => {
                warn!(source = %source.display(), "bounding box not applied: {}", failure);
                BoundsOutcome::Failed(failure)
            }
        };

        report.push(BoundsEntry {
            source,
            name: strip_geometry_marker(&stem),
            target,
            outcome,
        });
    }

    for target in report.collisions() {
        warn!(block = %target.display(), "several geometries map to the same block definition");
    }

    info!(
        patched = report.patched_count(),
        unchanged = report.unchanged_count(),
        failed = report.failed_count(),
        "bounding boxes adjusted"
    );

    Ok(report)
}

enum PatchResult {
    Patched(BoundingBox),
    NotABlock,
}

/// Read one geometry, compute its block box and patch the target in place.
fn apply_file(source: &Path, target: &Path) -> std::result::Result<PatchResult, BoundsFailure> {
    let contents = read_text(source, BoundsFailure::MalformedGeometry)?;
    let geometry = parse_geometry(&contents)?;
    let bounds = geometry.bounds();
    if bounds.is_empty() {
        return Err(BoundsFailure::MalformedGeometry(
            "geometry contains no cubes".to_string(),
        ));
    }
    debug!(source = %source.display(), cubes = geometry.cube_count(), "geometry bounds computed");
    let block_box = bounds.to_block_space().clamped();

    if !target.is_file() {
        return Err(BoundsFailure::TargetNotFound(target.to_path_buf()));
    }

    let text = read_text(target, BoundsFailure::MalformedTarget)?;
    match patch_block_aabb(&text, &block_box)? {
        PatchOutcome::NotABlock => Ok(PatchResult::NotABlock),
        PatchOutcome::Patched(output) => {
            std::fs::write(target, output)?;
            Ok(PatchResult::Patched(block_box))
        }
    }
}

/// Read `path` as UTF-8 text. Content that does not decode is reported
/// through `malformed`; only failed reads are I/O errors.
fn read_text(
    path: &Path,
    malformed: fn(String) -> BoundsFailure,
) -> std::result::Result<String, BoundsFailure> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| malformed(format!("{}: {}", path.display(), e)))
}

/// Regular `*.json` files in `dir` with their stems, sorted by name.
fn geometry_files(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if let Some(stem) = file_name.strip_suffix(JSON_EXTENSION) {
            files.push((path, stem.to_string()));
        }
    }

    files.sort();
    Ok(files)
}
