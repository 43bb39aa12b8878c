//! # Chart Validation Module
//!
//! Scans a chord chart and classifies the chords it contains.
//!
//! ## Per-Chord Rules
//! Each distinct bracket interior (trimmed) is checked once:
//! 1. Root parses and the quality is in the vocabulary: fine, no message
//! 2. Root parses but the quality is unknown: **warning**
//! 3. Root does not parse: **error**
//!
//! ## Chart Rules
//! - No chords at all: warning
//! - Shorter than the policy minimum (10 characters by default): warning
//! - Longer than the policy maximum (5000 characters by default): warning
//!
//! A chart is `valid` exactly when there are no errors. Validation never
//! fails: malformed chords are reported in the result.
//!
//! ## Example
//! ```rust
//! use cifra::validate;
//!
//! let result = validate("[G]Holy [Xy]Bad");
//! assert!(!result.valid);
//! assert_eq!(result.chords_found, vec!["G", "Xy"]);
//! ```

use std::collections::BTreeSet;

use crate::chord::Chord;
use crate::policy::ValidationPolicy;
use crate::transpose::chord_spans;

/// Outcome of validating a chart
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Distinct chord tokens, sorted ascending
    pub chords_found: Vec<String>,
}

/// Validate a chart against the default policy.
pub fn validate(chart: &str) -> ValidationResult {
    validate_with(chart, &ValidationPolicy::default())
}

/// Validate a chart against `policy`.
pub fn validate_with(chart: &str, policy: &ValidationPolicy) -> ValidationResult {
    let chords: BTreeSet<&str> = chord_spans(chart).map(|span| span.token).collect();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for token in &chords {
        match Chord::parse(token) {
            Ok(chord) if chord.is_standard(&policy.extra_qualities) => {}
            Ok(_) => warnings.push(format!("chord may be incomplete or non-standard: {}", token)),
            Err(_) => errors.push(format!("invalid chord: `{}`", token)),
        }
    }

    if chords.is_empty() {
        warnings.push("no chords found; use [Chord] annotation".to_string());
    }

    let length = chart.chars().count();
    if length < policy.min_length {
        warnings.push(format!(
            "chart too short ({} characters, minimum {})",
            length, policy.min_length
        ));
    }
    if length > policy.max_length {
        warnings.push(format!(
            "chart too long; consider splitting into sections ({} characters, maximum {})",
            length, policy.max_length
        ));
    }

    log::debug!(
        "validated chart: {} chords, {} errors, {} warnings",
        chords.len(),
        errors.len(),
        warnings.len()
    );

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
        chords_found: chords.into_iter().map(str::to_string).collect(),
    }
}
