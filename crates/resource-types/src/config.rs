//! Search settings.
//!
//! The defaults reproduce the engine's fixed heuristics. Callers that want
//! to tune them load settings explicitly with layered precedence:
//! defaults -> config file -> env vars. The engine itself never reads
//! files or the environment.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ResourceError;

/// Smallest writer budget tantivy accepts for one indexing thread (15 MB).
pub const MIN_WRITER_MEMORY_MB: usize = 15;

/// Largest writer budget tantivy accepts for one indexing thread (just under 4 GB).
pub const MAX_WRITER_MEMORY_MB: usize = 4095;

/// Highest edit distance the fuzzy sub-query supports.
pub const MAX_FUZZY_DISTANCE: u8 = 2;

/// Maximum hits returned per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCaps {
    #[serde(default = "default_exact_cap")]
    pub exact: usize,

    #[serde(default = "default_substring_cap")]
    pub substring: usize,

    #[serde(default = "default_general_cap")]
    pub general: usize,
}

fn default_exact_cap() -> usize {
    200
}

fn default_substring_cap() -> usize {
    500
}

fn default_general_cap() -> usize {
    1000
}

impl Default for TierCaps {
    fn default() -> Self {
        Self {
            exact: default_exact_cap(),
            substring: default_substring_cap(),
            general: default_general_cap(),
        }
    }
}

/// Per-clause boosts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostSettings {
    /// Wildcard on the exact variant in the substring tier
    #[serde(default = "default_substring_boost")]
    pub substring: f32,

    /// Fuzzy term on the analyzed variant
    #[serde(default = "default_fuzzy_boost")]
    pub fuzzy: f32,

    /// Prefix on the analyzed variant
    #[serde(default = "default_prefix_boost")]
    pub prefix: f32,

    /// Token match on the substring variant
    #[serde(default = "default_ngram_boost")]
    pub ngram: f32,

    /// Wildcard on the exact variant in the general tier
    #[serde(default = "default_wildcard_boost")]
    pub wildcard: f32,

    /// Extra token match on the substring variant of boosted fields
    #[serde(default = "default_boosted_field_boost")]
    pub boosted_field: f32,
}

fn default_substring_boost() -> f32 {
    1.0
}

fn default_fuzzy_boost() -> f32 {
    1.2
}

fn default_prefix_boost() -> f32 {
    1.3
}

fn default_ngram_boost() -> f32 {
    1.5
}

fn default_wildcard_boost() -> f32 {
    1.1
}

fn default_boosted_field_boost() -> f32 {
    1.8
}

impl Default for BoostSettings {
    fn default() -> Self {
        Self {
            substring: default_substring_boost(),
            fuzzy: default_fuzzy_boost(),
            prefix: default_prefix_boost(),
            ngram: default_ngram_boost(),
            wildcard: default_wildcard_boost(),
            boosted_field: default_boosted_field_boost(),
        }
    }
}

impl BoostSettings {
    fn iter(&self) -> [(&'static str, f32); 6] {
        [
            ("substring", self.substring),
            ("fuzzy", self.fuzzy),
            ("prefix", self.prefix),
            ("ngram", self.ngram),
            ("wildcard", self.wildcard),
            ("boosted_field", self.boosted_field),
        ]
    }
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub caps: TierCaps,

    #[serde(default)]
    pub boosts: BoostSettings,

    /// Edit distance for the fuzzy sub-query (0-2)
    #[serde(default = "default_fuzzy_distance")]
    pub fuzzy_distance: u8,

    /// Patterns at least this many characters long are specific
    #[serde(default = "default_specific_min_len")]
    pub specific_min_len: usize,

    /// Patterns with exactly this many dots are specific
    #[serde(default = "default_specific_dot_count")]
    pub specific_dot_count: usize,

    /// Memory budget for the in-RAM index writer in MB
    #[serde(default = "default_writer_memory_mb")]
    pub writer_memory_mb: usize,
}

fn default_fuzzy_distance() -> u8 {
    2
}

fn default_specific_min_len() -> usize {
    15
}

fn default_specific_dot_count() -> usize {
    3
}

fn default_writer_memory_mb() -> usize {
    20
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            caps: TierCaps::default(),
            boosts: BoostSettings::default(),
            fuzzy_distance: default_fuzzy_distance(),
            specific_min_len: default_specific_min_len(),
            specific_dot_count: default_specific_dot_count(),
            writer_memory_mb: default_writer_memory_mb(),
        }
    }
}

impl SearchSettings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/resource-search/search.toml)
    /// 3. Caller-specified config file (optional)
    /// 4. Environment variables (RESOURCE_SEARCH_*)
    ///
    /// Nested keys use a double underscore, e.g.
    /// `RESOURCE_SEARCH_BOOSTS__FUZZY=1.4`.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ResourceError> {
        let default_config_path = ProjectDirs::from("", "", "resource-search")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("search");

        let mut builder = Config::builder()
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("RESOURCE_SEARCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings: SearchSettings = builder
            .build()
            .map_err(|e| ResourceError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ResourceError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ResourceError> {
        if self.caps.exact == 0 || self.caps.substring == 0 || self.caps.general == 0 {
            return Err(ResourceError::InvalidSettings(
                "tier caps must be > 0".to_string(),
            ));
        }
        for (name, boost) in self.boosts.iter() {
            if !(boost.is_finite() && boost > 0.0) {
                return Err(ResourceError::InvalidSettings(format!(
                    "boost '{}' must be > 0, got {}",
                    name, boost
                )));
            }
        }
        if self.fuzzy_distance > MAX_FUZZY_DISTANCE {
            return Err(ResourceError::InvalidSettings(format!(
                "fuzzy_distance must be 0-{}, got {}",
                MAX_FUZZY_DISTANCE, self.fuzzy_distance
            )));
        }
        if self.specific_min_len == 0 {
            return Err(ResourceError::InvalidSettings(
                "specific_min_len must be > 0".to_string(),
            ));
        }
        if !(MIN_WRITER_MEMORY_MB..=MAX_WRITER_MEMORY_MB).contains(&self.writer_memory_mb) {
            return Err(ResourceError::InvalidSettings(format!(
                "writer_memory_mb must be {}-{}, got {}",
                MIN_WRITER_MEMORY_MB, MAX_WRITER_MEMORY_MB, self.writer_memory_mb
            )));
        }
        Ok(())
    }

    /// Writer budget in bytes. Saturates on unvalidated oversized values.
    pub fn writer_memory_bytes(&self) -> usize {
        self.writer_memory_mb.saturating_mul(1024 * 1024)
    }
}
