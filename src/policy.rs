//! Validation policy
//!
//! Thresholds and vocabulary used by [`crate::validate`], loadable from YAML:
//!
//! ```yaml
//! min-length: 10
//! max-length: 5000
//! notation: flat
//! extra-qualities:
//!   - "7(9)"
//!   - "(9)"
//! ```
//!
//! Every field is optional and falls back to the default.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CifraError;
use crate::pitch::Notation;
use crate::transpose::TransposeOptions;

pub const DEFAULT_MIN_LENGTH: usize = 10;
pub const DEFAULT_MAX_LENGTH: usize = 5000;

/// Raw policy for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawPolicy {
    min_length: Option<usize>,
    max_length: Option<usize>,
    extra_qualities: Option<Vec<String>>,
    notation: Option<Notation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Charts shorter than this (in characters) get a warning
    pub min_length: usize,
    /// Charts longer than this (in characters) get a warning
    pub max_length: usize,
    /// Quality suffixes accepted on top of the built-in vocabulary
    pub extra_qualities: Vec<String>,
    /// Default spelling for transposed roots
    pub notation: Notation,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            extra_qualities: Vec::new(),
            notation: Notation::Sharp,
        }
    }
}

impl ValidationPolicy {
    /// Parse a policy from a YAML document.
    ///
    /// ```
    /// use cifra::ValidationPolicy;
    ///
    /// let policy = ValidationPolicy::from_yaml("max-length: 200")?;
    /// assert_eq!(policy.max_length, 200);
    /// assert_eq!(policy.min_length, 10);
    /// # Ok::<(), cifra::CifraError>(())
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, CifraError> {
        // an empty document deserializes as unit, not as an empty map
        let raw: RawPolicy = if content.trim().is_empty() {
            RawPolicy::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| CifraError::ConfigError(e.to_string()))?
        };

        let defaults = Self::default();
        let policy = Self {
            min_length: raw.min_length.unwrap_or(defaults.min_length),
            max_length: raw.max_length.unwrap_or(defaults.max_length),
            extra_qualities: raw.extra_qualities.unwrap_or_default(),
            notation: raw.notation.unwrap_or(defaults.notation),
        };

        if policy.min_length > policy.max_length {
            return Err(CifraError::ConfigError(format!(
                "min-length ({}) is greater than max-length ({})",
                policy.min_length, policy.max_length
            )));
        }

        Ok(policy)
    }

    /// Transposition options spelled the way this policy asks.
    ///
    /// ```
    /// use cifra::{transpose_chart_with, ValidationPolicy};
    ///
    /// let policy = ValidationPolicy::from_yaml("notation: flat")?;
    /// assert_eq!(transpose_chart_with("[C]x", 1, &policy.transpose_options(false)), "[Db]x");
    /// # Ok::<(), cifra::CifraError>(())
    /// ```
    pub fn transpose_options(&self, transpose_bass: bool) -> TransposeOptions {
        TransposeOptions {
            notation: self.notation,
            transpose_bass,
        }
    }

    /// Read and parse a policy file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CifraError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CifraError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        log::debug!("loaded validation policy from {}", path.display());
        Self::from_yaml(&content)
    }
}
