//! Chord symbol parsing and transposition
//!
//! A chord token is a root (`[A-G][#b]?`) followed by an opaque quality
//! suffix (`m7`, `sus4`, `/G`, ...). Transposition rewrites the root only.
//!
//! # Quality Vocabulary
//!
//! A suffix counts as standard when it is `<quality>` or `<quality>/<bass>`,
//! where `<bass>` is a bare note and `<quality>` is one of:
//!
//! - **Major**: ``, `maj`, `M`
//! - **Minor**: `m`, `min`, `-`
//! - **Sevenths**: `7`, `maj7`, `M7`, `7M`, `m7`, `min7`, `-7`
//! - **Diminished / half-diminished**: `dim`, `dim7`, `°`, `m7b5`, `ø`
//! - **Augmented**: `aug`, `+`
//! - **Power / sixths**: `5`, `6`, `m6`
//! - **Extended**: `9`, `maj9`, `M9`, `m9`, `min9`, `11`, `m11`, `13`
//! - **Suspended**: `sus`, `sus2`, `sus4`, `7sus4`, `2`, `4`
//! - **Added tones**: `add9`, `madd9`, `add11`
//!
//! Anything else with a parseable root is treated as non-standard, not invalid.

use crate::error::CifraError;
use crate::pitch::PitchClass;
use crate::transpose::TransposeOptions;

const QUALITIES: &[&str] = &[
    // Major triads
    "", "maj", "M",
    // Minor triads
    "m", "min", "-",
    // Sevenths
    "7", "maj7", "M7", "7M", "m7", "min7", "-7",
    // Diminished
    "dim", "dim7", "°", "m7b5", "ø",
    // Augmented
    "aug", "+",
    // Power chord and sixths
    "5", "6", "m6",
    // Extended
    "9", "maj9", "M9", "m9", "min9", "11", "m11", "13",
    // Suspended
    "sus", "sus2", "sus4", "7sus4", "2", "4",
    // Added tones
    "add9", "madd9", "add11",
];

/// A chord token split into root and quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord<'a> {
    pub root: PitchClass,
    /// The root as written (`Bb`, `A#`, `G`)
    pub root_text: &'a str,
    /// Everything after the root, untouched
    pub quality: &'a str,
}

impl<'a> Chord<'a> {
    /// Split a token into root and quality.
    ///
    /// ```
    /// use cifra::chord::Chord;
    /// use cifra::pitch::PitchClass;
    ///
    /// let chord = Chord::parse("Bbmaj7").unwrap();
    /// assert_eq!(chord.root, PitchClass::ASharp);
    /// assert_eq!(chord.root_text, "Bb");
    /// assert_eq!(chord.quality, "maj7");
    /// ```
    pub fn parse(token: &'a str) -> Result<Self, CifraError> {
        let (root, len) = PitchClass::parse_root(token)
            .ok_or_else(|| CifraError::UnparsableChord(token.to_string()))?;
        Ok(Chord {
            root,
            root_text: &token[..len],
            quality: &token[len..],
        })
    }

    /// The quality without a trailing `/<bass>`, and the bass if present.
    pub fn split_bass(&self) -> (&'a str, Option<(PitchClass, &'a str)>) {
        split_bass(self.quality)
    }

    /// Whether the quality is in the standard vocabulary or in `extra`.
    pub fn is_standard(&self, extra: &[String]) -> bool {
        let (quality, bass) = self.split_bass();
        // a bare "/" with nothing recognizable after it is not a slash chord
        if bass.is_none() && quality.contains('/') {
            return extra.iter().any(|q| q == self.quality);
        }
        is_known_quality(quality) || extra.iter().any(|q| q == quality || q == self.quality)
    }

    /// Rebuild the token with the root moved by `semitones`.
    pub fn transpose(&self, semitones: i32, options: &TransposeOptions) -> String {
        let root = self.root.shift(semitones).name(options.notation);
        if options.transpose_bass {
            if let (quality, Some((bass, _))) = self.split_bass() {
                let bass = bass.shift(semitones).name(options.notation);
                return format!("{}{}/{}", root, quality, bass);
            }
        }
        format!("{}{}", root, self.quality)
    }
}

fn is_known_quality(quality: &str) -> bool {
    QUALITIES.contains(&quality)
}

fn split_bass(quality: &str) -> (&str, Option<(PitchClass, &str)>) {
    if let Some(slash) = quality.rfind('/') {
        let bass_text = &quality[slash + 1..];
        if let Some((bass, len)) = PitchClass::parse_root(bass_text) {
            if len == bass_text.len() {
                return (&quality[..slash], Some((bass, bass_text)));
            }
        }
    }
    (quality, None)
}

/// Transpose a single chord token with default options (sharp spelling).
///
/// ```
/// use cifra::transpose_chord;
///
/// assert_eq!(transpose_chord("Am7", 3).unwrap(), "Cm7");
/// assert_eq!(transpose_chord("Bb/D", 2).unwrap(), "C/D");
/// assert!(transpose_chord("xyz", 1).is_err());
/// ```
pub fn transpose_chord(chord: &str, semitones: i32) -> Result<String, CifraError> {
    transpose_chord_with(chord, semitones, &TransposeOptions::default())
}

/// Transpose a single chord token.
pub fn transpose_chord_with(
    chord: &str,
    semitones: i32,
    options: &TransposeOptions,
) -> Result<String, CifraError> {
    Ok(Chord::parse(chord)?.transpose(semitones, options))
}
