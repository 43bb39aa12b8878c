//! # Pitch-Class Arithmetic
//!
//! The twelve chromatic pitch classes, their spellings, and key transposition.
//!
//! ## Spelling Table
//! ```text
//! index  0  1   2  3   4  5  6   7  8   9  10  11
//! sharp  C  C#  D  D#  E  F  F#  G  G#  A  A#  B
//! flat   C  Db  D  Eb  E  F  Gb  G  Ab  A  Bb  B
//! ```
//!
//! Keys are always spelled with sharps. Chord roots follow a [`Notation`]
//! preference, sharp by default.
//!
//! All shifting is floor-modulo 12 (`rem_euclid`), so `-1` from `C` is `B`
//! and any `i32` is accepted as a semitone count.

use crate::error::CifraError;
use serde::{Deserialize, Serialize};

/// Canonical key names, in chromatic order starting at C.
pub const KEYS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Spelling preference for transposed chord roots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Sharp,
    Flat,
}

/// One of the twelve chromatic pitch classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Pitch class for any integer, wrapped into `0..12`.
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    /// Semitones above C, `0..12`.
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Shift by a signed number of semitones.
    pub fn shift(self, semitones: i32) -> Self {
        // widen so i32::MIN / MAX shifts cannot overflow
        let shifted = (self.index() as i64 + semitones as i64).rem_euclid(12);
        Self::ALL[shifted as usize]
    }

    pub fn name(self, notation: Notation) -> &'static str {
        match notation {
            Notation::Sharp => KEYS[self as usize],
            Notation::Flat => FLAT_NAMES[self as usize],
        }
    }

    /// Look up a canonical (sharp-spelled, case-sensitive) key name.
    pub fn from_key_name(key: &str) -> Option<Self> {
        KEYS.iter().position(|k| *k == key).map(|i| Self::ALL[i])
    }

    /// Parse the longest `[A-G][#b]?` prefix of `s`.
    ///
    /// Returns the pitch class and the number of bytes consumed, or `None` if
    /// `s` does not start with a note letter. Both spellings are accepted, so
    /// `C#` and `Db` resolve to the same class.
    ///
    /// ```
    /// use cifra::pitch::PitchClass;
    ///
    /// assert_eq!(PitchClass::parse_root("Bbm7"), Some((PitchClass::ASharp, 2)));
    /// assert_eq!(PitchClass::parse_root("G/B"), Some((PitchClass::G, 1)));
    /// assert_eq!(PitchClass::parse_root("Chorus"), Some((PitchClass::C, 1)));
    /// assert_eq!(PitchClass::parse_root("Xy"), None);
    /// ```
    pub fn parse_root(s: &str) -> Option<(Self, usize)> {
        let bytes = s.as_bytes();
        let base = match bytes.first()? {
            b'C' => 0,
            b'D' => 2,
            b'E' => 4,
            b'F' => 5,
            b'G' => 7,
            b'A' => 9,
            b'B' => 11,
            _ => return None,
        };
        let (accidental, len) = match bytes.get(1) {
            Some(b'#') => (1, 2),
            Some(b'b') => (-1, 2),
            _ => (0, 1),
        };
        Some((Self::from_index(base + accidental), len))
    }
}

/// Transpose a key name by the given number of semitones.
///
/// The key must be one of [`KEYS`]; the result is always sharp-spelled.
///
/// ```
/// use cifra::transpose_key;
///
/// assert_eq!(transpose_key("G", 2).unwrap(), "A");
/// assert_eq!(transpose_key("B", 2).unwrap(), "C#");
/// assert_eq!(transpose_key("C", -1).unwrap(), "B");
/// assert!(transpose_key("Bb", 1).is_err());
/// ```
pub fn transpose_key(key: &str, semitones: i32) -> Result<&'static str, CifraError> {
    let pitch = PitchClass::from_key_name(key)
        .ok_or_else(|| CifraError::InvalidKey(key.to_string()))?;
    Ok(pitch.shift(semitones).name(Notation::Sharp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, key) in KEYS.iter().enumerate() {
            let pitch = PitchClass::from_index(i as i32);
            assert_eq!(pitch.index(), i as i32);
            assert_eq!(pitch.name(Notation::Sharp), *key);
        }
    }

    #[test]
    fn test_from_index_wraps_negative() {
        assert_eq!(PitchClass::from_index(-1), PitchClass::B);
        assert_eq!(PitchClass::from_index(-13), PitchClass::B);
        assert_eq!(PitchClass::from_index(12), PitchClass::C);
        assert_eq!(PitchClass::from_index(25), PitchClass::CSharp);
    }

    #[test]
    fn test_shift_extremes_do_not_overflow() {
        // i32::MAX = 2147483647 ≡ 7 (mod 12)
        assert_eq!(PitchClass::C.shift(i32::MAX), PitchClass::G);
        // i32::MIN = -2147483648 ≡ 4 (mod 12)
        assert_eq!(PitchClass::C.shift(i32::MIN), PitchClass::E);
    }

    #[test]
    fn test_flat_spelling() {
        assert_eq!(PitchClass::ASharp.name(Notation::Flat), "Bb");
        assert_eq!(PitchClass::CSharp.name(Notation::Flat), "Db");
        assert_eq!(PitchClass::E.name(Notation::Flat), "E");
    }

    #[test]
    fn test_parse_root_enharmonics() {
        assert_eq!(PitchClass::parse_root("C#"), PitchClass::parse_root("Db"));
        assert_eq!(PitchClass::parse_root("E#"), Some((PitchClass::F, 2)));
        assert_eq!(PitchClass::parse_root("Fb"), Some((PitchClass::E, 2)));
        assert_eq!(PitchClass::parse_root("B#"), Some((PitchClass::C, 2)));
        assert_eq!(PitchClass::parse_root("Cb"), Some((PitchClass::B, 2)));
    }

    #[test]
    fn test_parse_root_rejects_lowercase_and_empty() {
        assert_eq!(PitchClass::parse_root(""), None);
        assert_eq!(PitchClass::parse_root("am"), None);
        assert_eq!(PitchClass::parse_root(" G"), None);
    }

    #[test]
    fn test_transpose_key_examples() {
        assert_eq!(transpose_key("G", 2).unwrap(), "A");
        assert_eq!(transpose_key("B", 2).unwrap(), "C#");
        assert_eq!(transpose_key("C", -1).unwrap(), "B");
        assert_eq!(transpose_key("E", 0).unwrap(), "E");
        assert_eq!(transpose_key("A#", 14).unwrap(), "C");
    }

    #[test]
    fn test_transpose_key_rejects_non_canonical() {
        for bad in ["Bb", "g", "H", "", "C# ", "Am"] {
            assert_eq!(
                transpose_key(bad, 1),
                Err(CifraError::InvalidKey(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }
}
