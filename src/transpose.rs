//! # Chart Transposition
//!
//! Rewrites every bracketed chord in a chord chart by a number of semitones.
//!
//! ## Chart Format
//! A chart is free text with inline chord annotations in square brackets:
//!
//! ```text
//! [G]Holy, holy, [D]holy, [Em]Lord God Al[C]mighty
//! ```
//!
//! A span is a `[`, one or more non-`]` characters, then `]`. Brackets do not
//! nest: the first `]` always closes the span.
//!
//! ## Partial Failure
//! Bracket contents that do not start with a root letter (`[Xy]`, `[intro]`)
//! are left exactly as written and the rest of the chart is still transposed.
//! A bad declared key, on the other hand, fails the whole request.
//!
//! Labels that happen to start with `A`-`G` read as a root plus an unknown
//! quality, so `[Chorus]` shifted by +2 becomes `[Dhorus]`. Write section
//! labels outside brackets, or start them with another letter, to keep them.
//!
//! ## Example
//! ```rust
//! use cifra::transpose_chart;
//!
//! assert_eq!(transpose_chart("[G]Holy [D]Holy", 2), "[A]Holy [E]Holy");
//! assert_eq!(transpose_chart("[Am7]Test", 3), "[Cm7]Test");
//! assert_eq!(transpose_chart("[?] stays", 5), "[?] stays");
//! ```

use std::borrow::Cow;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::chord::Chord;
use crate::error::CifraError;
use crate::pitch::{transpose_key, Notation};

static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("bracket pattern is valid"));

/// How transposed chords are spelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransposeOptions {
    /// Sharp or flat respelling of shifted roots
    pub notation: Notation,
    /// Also shift a trailing `/<bass>` note; off by default so the quality
    /// suffix stays opaque
    pub transpose_bass: bool,
}

/// A bracketed span found in a chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSpan<'a> {
    /// Byte range of the whole span, brackets included
    pub range: Range<usize>,
    /// Interior with surrounding whitespace removed
    pub token: &'a str,
}

/// Iterate over the bracketed spans of a chart, left to right.
pub fn chord_spans(chart: &str) -> impl Iterator<Item = ChordSpan<'_>> {
    BRACKETED.captures_iter(chart).filter_map(|caps| {
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        Some(ChordSpan {
            range: whole.range(),
            token: inner.as_str().trim(),
        })
    })
}

/// Transpose every chord in a chart with default options.
pub fn transpose_chart(chart: &str, semitones: i32) -> String {
    transpose_chart_with(chart, semitones, &TransposeOptions::default())
}

/// Transpose every chord in a chart.
///
/// Text outside brackets is copied unchanged. Whitespace padding inside a
/// bracket is kept around the rewritten chord.
pub fn transpose_chart_with(chart: &str, semitones: i32, options: &TransposeOptions) -> String {
    if semitones == 0 {
        return chart.to_string();
    }

    let replaced: Cow<'_, str> = BRACKETED.replace_all(chart, |caps: &Captures<'_>| {
        let inner = &caps[1];
        let token = inner.trim();
        match Chord::parse(token) {
            Ok(chord) => {
                let transposed = chord.transpose(semitones, options);
                log::trace!("{} -> {}", token, transposed);
                let start = inner.len() - inner.trim_start().len();
                let end = inner.trim_end().len();
                format!("[{}{}{}]", &inner[..start], transposed, &inner[end..])
            }
            Err(e) => {
                log::debug!("leaving span untouched: {}", e);
                caps[0].to_string()
            }
        }
    });
    replaced.into_owned()
}

/// Input for a full transposition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransposeRequest {
    pub chart: String,
    pub semitones: i32,
    /// Key the chart is written in, if declared
    pub original_key: Option<String>,
}

/// Outcome of a full transposition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransposeResult {
    pub original_chart: String,
    pub transposed_chart: String,
    pub original_key: Option<String>,
    /// Present exactly when `original_key` was supplied
    pub final_key: Option<String>,
    pub semitones: i32,
}

/// Transpose a chart and, if declared, its key.
///
/// # Errors
/// [`CifraError::InvalidKey`] when `original_key` is not a canonical key name.
/// Chords that fail to parse never cause an error.
///
/// ```
/// use cifra::{transpose, TransposeRequest};
///
/// let result = transpose(&TransposeRequest {
///     chart: "[G]Holy [D]Holy".to_string(),
///     semitones: 2,
///     original_key: Some("G".to_string()),
/// })?;
/// assert_eq!(result.transposed_chart, "[A]Holy [E]Holy");
/// assert_eq!(result.final_key.as_deref(), Some("A"));
/// # Ok::<(), cifra::CifraError>(())
/// ```
pub fn transpose(request: &TransposeRequest) -> Result<TransposeResult, CifraError> {
    transpose_with(request, &TransposeOptions::default())
}

/// [`transpose`] with explicit spelling options.
pub fn transpose_with(
    request: &TransposeRequest,
    options: &TransposeOptions,
) -> Result<TransposeResult, CifraError> {
    let final_key = match &request.original_key {
        Some(key) => Some(transpose_key(key, request.semitones)?.to_string()),
        None => None,
    };

    let transposed_chart = transpose_chart_with(&request.chart, request.semitones, options);
    log::info!(
        "transposed chart by {} semitones ({} chars)",
        request.semitones,
        request.chart.chars().count()
    );

    Ok(TransposeResult {
        original_chart: request.chart.clone(),
        transposed_chart,
        original_key: request.original_key.clone(),
        final_key,
        semitones: request.semitones,
    })
}
