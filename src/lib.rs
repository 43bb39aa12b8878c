pub mod api;
pub mod chord;
pub mod error;
pub mod pitch;
pub mod policy;
pub mod sheet;
pub mod transpose;
pub mod validate;

pub use chord::{transpose_chord, transpose_chord_with, Chord};
pub use error::*;
pub use pitch::{transpose_key, Notation, PitchClass, KEYS};
pub use policy::ValidationPolicy;
pub use sheet::{SheetMetadata, SongSheet};
pub use transpose::{
    transpose, transpose_chart, transpose_chart_with, transpose_with, TransposeOptions,
    TransposeRequest, TransposeResult,
};
pub use validate::{validate, validate_with, ValidationResult};

/// Transpose a song sheet's text, front matter included.
/// This is the main entry point for files on disk.
pub fn transpose_sheet(
    source: &str,
    semitones: i32,
    options: &TransposeOptions,
) -> Result<String, CifraError> {
    let sheet = SongSheet::parse(source)?;
    sheet.transpose(semitones, options)?.render()
}

/// Validate the chart part of a song sheet, ignoring its front matter.
pub fn validate_sheet(
    source: &str,
    policy: &ValidationPolicy,
) -> Result<ValidationResult, CifraError> {
    let sheet = SongSheet::parse(source)?;
    Ok(validate_with(&sheet.chart, policy))
}
