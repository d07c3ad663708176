use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::config::validation;
use crate::utils::error::RustocError;

/// Editor-facing settings for heading and TOC processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocSettings {
    /// Heading levels to process, as single-digit strings ("1".."6")
    #[serde(default = "defaults::default_heading_levels")]
    pub heading_levels: Vec<String>,
}

impl Default for TocSettings {
    fn default() -> Self {
        Self {
            heading_levels: defaults::default_heading_levels(),
        }
    }
}

impl TocSettings {
    /// Parse settings from the host editor's JSON payload
    pub fn from_json(payload: &str) -> Result<Self, RustocError> {
        serde_json::from_str(payload).map_err(|e| RustocError::Config(e.to_string()))
    }

    /// Validate the configured levels into a selection usable by operations
    pub fn level_set(&self) -> LevelSet {
        LevelSet::from_raw(&self.heading_levels)
    }
}

/// A validated heading-level selection.
///
/// Keeps track of whether the raw configured list was non-empty, so that
/// "configured but entirely invalid" can be told apart from "nothing
/// configured at all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSet {
    levels: Vec<usize>,
    configured: bool,
}

impl LevelSet {
    /// Build from the raw configured list, dropping invalid entries
    pub fn from_raw(raw: &[String]) -> Self {
        Self {
            levels: validation::valid_levels(raw),
            configured: !raw.is_empty(),
        }
    }

    /// Build directly from numeric levels; out-of-range values are dropped
    pub fn from_levels(levels: &[usize]) -> Self {
        let mut valid = Vec::new();
        for &level in levels {
            if (1..=6).contains(&level) && !valid.contains(&level) {
                valid.push(level);
            }
        }
        Self {
            levels: valid,
            configured: !levels.is_empty(),
        }
    }

    /// The levels that survived validation, in configured order
    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    /// True when no level survived validation
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// True when the raw configured list was non-empty
    pub fn was_configured(&self) -> bool {
        self.configured
    }
}
