//! # Block Pack Builder
//!
//! A Rust library for generating NetEase/Bedrock block add-ons from a folder
//! of textures and a folder of geometry files.
//!
//! ## Overview
//!
//! Every texture becomes an entity with a matching block. The builder renames
//! the input assets, stamps out behavior and client entity documents, merges
//! the shared index files, copies the assets into the pack tree and finally
//! sizes each block's `netease:aabb` box from its geometry.
//!
//! ## Quick Start
//!
//! ```ignore
//! use block_pack_builder::{BuildConfig, PackBuilder};
//!
//! let config = BuildConfig::default().with_namespace("ecx");
//! let summary = PackBuilder::with_config(config).run(
//!     "build".as_ref(),
//!     "input/textures".as_ref(),
//!     "input/models".as_ref(),
//! )?;
//!
//! println!("{}", summary.bounds);
//! ```
//!
//! ## Bounds Only
//!
//! The bounding box step can be run on its own against an existing pack:
//!
//! ```ignore
//! use block_pack_builder::{apply_bounds, SuffixNaming};
//!
//! let report = apply_bounds(
//!     "resource_pack/models/entity/drinkBlock".as_ref(),
//!     "behavior_pack/netease_blocks".as_ref(),
//!     &SuffixNaming::new("_entity", "_block"),
//! )?;
//! assert!(report.is_success());
//! ```

pub mod error;
pub mod types;
pub mod config;
pub mod json;
pub mod geometry;
pub mod aabb;
pub mod pack;
pub mod builder;

// Re-export main types for convenience
pub use error::{BoundsFailure, PackError, Result};
pub use types::{BoundingBox, SuffixNaming, TargetNaming};
pub use config::BuildConfig;
pub use geometry::{extract_bounds, GeometryDocument};
pub use aabb::{apply_bounds, BoundsEntry, BoundsOutcome, BoundsReport};
pub use pack::PackLayout;
pub use builder::{BuildSummary, PackBuilder};
