//! File naming rules shared by the pipeline stages.

/// Marker token that sits between a geometry's name and its `.json` extension.
pub const GEOMETRY_MARKER: &str = ".geo";

/// Extension of every document the pipeline reads or writes.
pub const JSON_EXTENSION: &str = ".json";

/// Maps a geometry file stem to the stem of its block definition.
///
/// The stem is the file name without the trailing `.json`, e.g.
/// `drinks_cola_entity.geo`.
pub trait TargetNaming {
    fn target_stem(&self, geometry_stem: &str) -> String;
}

impl<F> TargetNaming for F
where
    F: Fn(&str) -> String,
{
    fn target_stem(&self, geometry_stem: &str) -> String {
        self(geometry_stem)
    }
}

/// The stock naming rule: an entity suffix names models and textures, a
/// block suffix names block definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixNaming {
    pub entity_suffix: String,
    pub block_suffix: String,
}

impl SuffixNaming {
    pub fn new(entity_suffix: impl Into<String>, block_suffix: impl Into<String>) -> Self {
        Self {
            entity_suffix: entity_suffix.into(),
            block_suffix: block_suffix.into(),
        }
    }

    /// Replace every occurrence of the entity suffix with the block suffix.
    /// "drinks_cola_entity" -> "drinks_cola_block"
    pub fn block_name(&self, entity_name: &str) -> String {
        if self.entity_suffix.is_empty() {
            return entity_name.to_string();
        }
        entity_name.replace(&self.entity_suffix, &self.block_suffix)
    }
}

impl TargetNaming for SuffixNaming {
    /// "drinks_cola_entity.geo" -> "drinks_cola_block"
    fn target_stem(&self, geometry_stem: &str) -> String {
        let marker = format!("{}{}", self.entity_suffix, GEOMETRY_MARKER);
        geometry_stem.replace(&marker, &self.block_suffix)
    }
}

/// Remove every `.geo` marker from a stem.
pub fn strip_geometry_marker(stem: &str) -> String {
    stem.replace(GEOMETRY_MARKER, "")
}
