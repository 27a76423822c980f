//! Per-file results of a bounds run.

use crate::error::BoundsFailure;
use crate::types::BoundingBox;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// What happened to one geometry file.
#[derive(Debug)]
pub enum BoundsOutcome {
    /// The target was rewritten with this block-space box.
    Patched(BoundingBox),
    /// The target is not a block definition and was left alone.
    Unchanged,
    /// The file was skipped.
    Failed(BoundsFailure),
}

/// One geometry file and its block definition.
#[derive(Debug)]
pub struct BoundsEntry {
    /// Geometry file that was read.
    pub source: PathBuf,
    /// Geometry name with the `.json` extension and `.geo` marker removed.
    pub name: String,
    /// Block definition the box is written to.
    pub target: PathBuf,
    pub outcome: BoundsOutcome,
}

impl BoundsEntry {
    pub fn is_patched(&self) -> bool {
        matches!(self.outcome, BoundsOutcome::Patched(_))
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self.outcome, BoundsOutcome::Unchanged)
    }

    pub fn failure(&self) -> Option<&BoundsFailure> {
        match &self.outcome {
            BoundsOutcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Outcome of every geometry file visited by [`apply_bounds`](super::apply_bounds).
#[derive(Debug, Default)]
pub struct BoundsReport {
    /// Entries in the order the files were processed.
    pub entries: Vec<BoundsEntry>,
}

impl BoundsReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: BoundsEntry) {
        self.entries.push(entry);
    }

    pub fn patched(&self) -> impl Iterator<Item = &BoundsEntry> {
        self.entries.iter().filter(|e| e.is_patched())
    }

    pub fn unchanged(&self) -> impl Iterator<Item = &BoundsEntry> {
        self.entries.iter().filter(|e| e.is_unchanged())
    }

    pub fn failed(&self) -> impl Iterator<Item = &BoundsEntry> {
        self.entries.iter().filter(|e| e.failure().is_some())
    }

    pub fn patched_count(&self) -> usize {
        self.patched().count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.unchanged().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// Look up the entry for a geometry name (see [`BoundsEntry::name`]).
    pub fn entry(&self, name: &str) -> Option<&BoundsEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Targets written by more than one geometry file. The last write wins.
    pub fn collisions(&self) -> Vec<&Path> {
        let mut writes: HashMap<&Path, usize> = HashMap::new();
        for entry in self.patched() {
            *writes.entry(entry.target.as_path()).or_default() += 1;
        }

        let mut collisions: Vec<&Path> = writes
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(path, _)| path)
            .collect();
        collisions.sort();
        collisions
    }
}

impl fmt::Display for BoundsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} patched, {} unchanged, {} failed",
            self.patched_count(),
            self.unchanged_count(),
            self.failed_count()
        )?;

        for entry in &self.entries {
            let target = entry
                .target
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default();
            match &entry.outcome {
                BoundsOutcome::Patched(bounds) => writeln!(
                    f,
                    "  patched   {} -> {} min {:?} max {:?}",
                    entry.name, target, bounds.min, bounds.max
                )?,
                BoundsOutcome::Unchanged => writeln!(
                    f,
                    "  unchanged {} -> {} (not a block definition)",
                    entry.name, target
                )?,
                BoundsOutcome::Failed(failure) => {
                    writeln!(f, "  failed    {}: {}", entry.name, failure)?
                }
            }
        }

        Ok(())
    }
}
