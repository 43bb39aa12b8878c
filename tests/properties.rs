//! Property-based tests for transposition and validation using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test properties
//! ```

use proptest::prelude::*;

use cifra::{
    transpose_chart, transpose_chart_with, transpose_key, validate, Notation, TransposeOptions,
    KEYS,
};

// ============================================================================
// Strategies
// ============================================================================

fn canonical_key() -> impl Strategy<Value = &'static str> {
    prop::sample::select(KEYS.to_vec())
}

/// Chords with natural or sharp roots, which survive a round trip under the
/// default sharp spelling.
fn sharp_chord() -> impl Strategy<Value = String> {
    (
        prop::sample::select(KEYS.to_vec()),
        prop::sample::select(vec![
            "", "m", "7", "maj7", "m7", "sus4", "dim", "add9", "/E", "m7/G#",
        ]),
    )
        .prop_map(|(root, quality)| format!("{}{}", root, quality))
}

/// Lyric text that cannot open or close a span.
fn lyric() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?é\n]{0,20}"
}

fn well_formed_chart() -> impl Strategy<Value = String> {
    prop::collection::vec((sharp_chord(), lyric()), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(chord, text)| format!("[{}]{}", chord, text))
            .collect()
    })
}

fn flat_root() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
    ])
}

/// Anything at all, brackets included.
fn arbitrary_chart() -> impl Strategy<Value = String> {
    "[\\[\\]A-Ga-z#b/0-9 \n]{0,80}"
}

fn without_spans(chart: &str) -> String {
    let mut out = String::new();
    let mut rest = chart;
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(']') {
            // a span needs at least one character inside
            Some(close) if close > 0 => rest = &after[close + 1..],
            _ => {
                out.push('[');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// ============================================================================
// Key laws
// ============================================================================

proptest! {
    #[test]
    fn key_round_trip(key in canonical_key(), s in -1000i32..1000) {
        let there = transpose_key(key, s).unwrap();
        prop_assert_eq!(transpose_key(there, -s).unwrap(), key);
    }

    #[test]
    fn key_is_periodic(key in canonical_key(), s in -1000i32..1000) {
        prop_assert_eq!(transpose_key(key, s).unwrap(), transpose_key(key, s + 12).unwrap());
    }

    #[test]
    fn key_result_is_canonical(key in canonical_key(), s in any::<i32>()) {
        let result = transpose_key(key, s).unwrap();
        prop_assert!(KEYS.contains(&result));
    }
}

// ============================================================================
// Chart laws
// ============================================================================

proptest! {
    #[test]
    fn zero_shift_is_noop(chart in arbitrary_chart()) {
        prop_assert_eq!(transpose_chart(&chart, 0), chart);
    }

    #[test]
    fn well_formed_charts_round_trip(chart in well_formed_chart(), s in -30i32..30) {
        let there = transpose_chart(&chart, s);
        prop_assert_eq!(transpose_chart(&there, -s), chart);
    }

    #[test]
    fn flat_charts_round_trip_with_flat_notation(
        roots in prop::collection::vec(flat_root(), 0..10),
        s in -11i32..=11,
    ) {
        let chart: String = roots.iter().map(|r| format!("[{}m7]la ", r)).collect();
        let options = TransposeOptions {
            notation: Notation::Flat,
            ..TransposeOptions::default()
        };
        let there = transpose_chart_with(&chart, s, &options);
        prop_assert_eq!(transpose_chart_with(&there, -s, &options), chart);
    }

    #[test]
    fn text_outside_spans_is_preserved(chart in arbitrary_chart(), s in any::<i32>()) {
        let transposed = transpose_chart(&chart, s);
        prop_assert_eq!(without_spans(&transposed), without_spans(&chart));
    }
}

// ============================================================================
// Validation laws
// ============================================================================

proptest! {
    #[test]
    fn chords_found_sorted_and_unique(chart in arbitrary_chart()) {
        let result = validate(&chart);
        for pair in result.chords_found.windows(2) {
            prop_assert!(pair[0] < pair[1], "{:?} not strictly ascending", result.chords_found);
        }
    }

    #[test]
    fn validation_is_total(chart in ".{0,200}") {
        let result = validate(&chart);
        prop_assert_eq!(result.valid, result.errors.is_empty());
    }
}
