//! Error types for the pack builder.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using PackError.
pub type Result<T> = std::result::Result<T, PackError>;

/// Main error type for pack building operations.
#[derive(Error, Debug)]
pub enum PackError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or write JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A document parsed but does not have the expected structure.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The build configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required input directory does not exist.
    #[error("Directory not found: {0}")]
    MissingDirectory(PathBuf),
}

/// Why a single geometry file could not be applied to its block definition.
///
/// These never abort a batch; they are collected into a
/// [`BoundsReport`](crate::aabb::BoundsReport).
#[derive(Error, Debug)]
pub enum BoundsFailure {
    /// The geometry document is missing required structure or has no cubes.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    /// No block definition exists at the computed target path.
    #[error("target not found: {}", .0.display())]
    TargetNotFound(PathBuf),

    /// The block definition could not be parsed or lacks the aabb component.
    #[error("malformed target: {0}")]
    MalformedTarget(String),

    /// Reading or writing one of the files failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
