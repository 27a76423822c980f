//! Build configuration.

use crate::error::{PackError, Result};
use crate::types::SuffixNaming;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Naming and layout settings for a pack build.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Identifier namespace, e.g. "ecx" in "ecx:drinks_cola_entity".
    pub namespace: String,
    /// Prepended to every texture and geometry file name.
    pub prefix: String,
    /// Appended to entity (texture/geometry) names.
    pub entity_suffix: String,
    /// Replaces the entity suffix in block names.
    pub block_suffix: String,
    /// Sub-directory used under the entity folders of both packs.
    pub directory: String,
    /// Substrings removed from input file names before the prefix and suffix
    /// are applied, in order.
    pub strip_tokens: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            namespace: "ecx".to_string(),
            prefix: "drinks_".to_string(),
            entity_suffix: "_entity".to_string(),
            block_suffix: "_block".to_string(),
            directory: "drinkBlock".to_string(),
            strip_tokens: ["_entity", "drink_", "drinks_", "_block"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl BuildConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffixes(
        mut self,
        entity_suffix: impl Into<String>,
        block_suffix: impl Into<String>,
    ) -> Self {
        self.entity_suffix = entity_suffix.into();
        self.block_suffix = block_suffix.into();
        self
    }

    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_strip_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strip_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// The entity/block naming rule described by this configuration.
    pub fn naming(&self) -> SuffixNaming {
        SuffixNaming::new(&self.entity_suffix, &self.block_suffix)
    }

    /// Check that the configuration can produce distinct, well-formed names.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("namespace", &self.namespace),
            ("entity_suffix", &self.entity_suffix),
            ("block_suffix", &self.block_suffix),
            ("directory", &self.directory),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(PackError::InvalidConfig(format!("{} must not be empty", field)));
            }
        }

        if self.entity_suffix == self.block_suffix {
            return Err(PackError::InvalidConfig(format!(
                "entity_suffix and block_suffix are both '{}'",
                self.entity_suffix
            )));
        }

        if self.namespace.contains(':') {
            return Err(PackError::InvalidConfig(format!(
                "namespace '{}' must not contain ':'",
                self.namespace
            )));
        }

        if self.strip_tokens.iter().any(String::is_empty) {
            return Err(PackError::InvalidConfig(
                "strip_tokens must not contain empty strings".to_string(),
            ));
        }

        Ok(())
    }
}
