//! Song sheets: a chord chart with optional YAML front matter.
//!
//! ```text
//! ---
//! title: Santo
//! artist: Ministério Exemplo
//! key: G
//! bpm: 72
//! ---
//! [G]Santo, [D]santo, [Em]santo
//! ```
//!
//! Front matter is optional; without a leading `---` line the whole text is
//! the chart.

use serde::{Deserialize, Serialize};

use crate::error::CifraError;
use crate::pitch::transpose_key;
use crate::transpose::{transpose_chart_with, TransposeOptions};

const MARKER: &str = "---";

/// Front matter fields, all optional
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct SheetMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Declared key, one of the canonical key names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Worship leader who usually leads the song
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minister: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpm: Option<u16>,
}

impl SheetMetadata {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SongSheet {
    pub metadata: SheetMetadata,
    pub chart: String,
}

impl SongSheet {
    /// Split front matter from the chart.
    ///
    /// # Errors
    /// [`CifraError::MetadataError`] if the front matter is not closed or is
    /// not valid YAML.
    ///
    /// ```
    /// use cifra::SongSheet;
    ///
    /// let sheet = SongSheet::parse("---\ntitle: Santo\nkey: G\n---\n[G]Santo")?;
    /// assert_eq!(sheet.metadata.key.as_deref(), Some("G"));
    /// assert_eq!(sheet.chart, "[G]Santo");
    /// # Ok::<(), cifra::CifraError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, CifraError> {
        let Some(rest) = strip_opening_marker(text) else {
            return Ok(Self {
                metadata: SheetMetadata::default(),
                chart: text.to_string(),
            });
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == MARKER {
                let metadata = parse_metadata(&rest[..offset])?;
                return Ok(Self {
                    metadata,
                    chart: rest[offset + line.len()..].to_string(),
                });
            }
            offset += line.len();
        }

        Err(CifraError::MetadataError(
            "front matter is missing its closing ---".to_string(),
        ))
    }

    /// Write the sheet back out, front matter first when there is any.
    pub fn render(&self) -> Result<String, CifraError> {
        if self.metadata.is_empty() {
            return Ok(self.chart.clone());
        }
        let yaml = serde_yaml::to_string(&self.metadata)
            .map_err(|e| CifraError::MetadataError(e.to_string()))?;
        Ok(format!("{}\n{}{}\n{}", MARKER, yaml, MARKER, self.chart))
    }

    /// Transpose the chart and the declared key together.
    ///
    /// # Errors
    /// [`CifraError::InvalidKey`] if the sheet declares a non-canonical key.
    pub fn transpose(
        &self,
        semitones: i32,
        options: &TransposeOptions,
    ) -> Result<Self, CifraError> {
        let key = match &self.metadata.key {
            Some(key) => Some(transpose_key(key, semitones)?.to_string()),
            None => None,
        };
        Ok(Self {
            metadata: SheetMetadata {
                key,
                ..self.metadata.clone()
            },
            chart: transpose_chart_with(&self.chart, semitones, options),
        })
    }
}

fn strip_opening_marker(text: &str) -> Option<&str> {
    let first = text.split_inclusive('\n').next()?;
    if first.trim_end() == MARKER {
        Some(&text[first.len()..])
    } else {
        None
    }
}

fn parse_metadata(yaml: &str) -> Result<SheetMetadata, CifraError> {
    if yaml.trim().is_empty() {
        return Ok(SheetMetadata::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| CifraError::MetadataError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SANTO: &str = "---
title: Santo
artist: Ministério Exemplo
key: G
bpm: 72
---
[G]Santo, [D]santo
";

    #[test]
    fn test_parse_front_matter() {
        let sheet = SongSheet::parse(SANTO).unwrap();
        assert_eq!(
            sheet.metadata,
            SheetMetadata {
                title: Some("Santo".to_string()),
                artist: Some("Ministério Exemplo".to_string()),
                key: Some("G".to_string()),
                minister: None,
                bpm: Some(72),
            }
        );
        assert_eq!(sheet.chart, "[G]Santo, [D]santo\n");
    }

    #[test]
    fn test_parse_without_front_matter() {
        let sheet = SongSheet::parse("[C]Just a chart\n---\nmore").unwrap();
        assert!(sheet.metadata.is_empty());
        assert_eq!(sheet.chart, "[C]Just a chart\n---\nmore");
    }

    #[test]
    fn test_empty_front_matter() {
        let sheet = SongSheet::parse("---\n---\n[C]x").unwrap();
        assert!(sheet.metadata.is_empty());
        assert_eq!(sheet.chart, "[C]x");
    }

    #[test]
    fn test_unclosed_front_matter() {
        assert!(matches!(
            SongSheet::parse("---\ntitle: Santo\n[G]Santo"),
            Err(CifraError::MetadataError(_))
        ));
    }

    #[test]
    fn test_bad_yaml() {
        assert!(matches!(
            SongSheet::parse("---\nbpm: fast\n---\n[G]x"),
            Err(CifraError::MetadataError(_))
        ));
    }

    #[test]
    fn test_render_round_trip() {
        let sheet = SongSheet::parse(SANTO).unwrap();
        let rendered = sheet.render().unwrap();
        assert_eq!(SongSheet::parse(&rendered).unwrap(), sheet);
    }

    #[test]
    fn test_render_without_metadata() {
        let sheet = SongSheet {
            metadata: SheetMetadata::default(),
            chart: "[G]x".to_string(),
        };
        assert_eq!(sheet.render().unwrap(), "[G]x");
    }

    #[test]
    fn test_transpose_sheet() {
        let sheet = SongSheet::parse(SANTO).unwrap();
        let up = sheet.transpose(2, &TransposeOptions::default()).unwrap();
        assert_eq!(up.metadata.key.as_deref(), Some("A"));
        assert_eq!(up.metadata.title, sheet.metadata.title);
        assert_eq!(up.chart, "[A]Santo, [E]santo\n");
    }

    #[test]
    fn test_transpose_sheet_invalid_key() {
        let sheet = SongSheet::parse("---\nkey: Bb\n---\n[Bb]x").unwrap();
        assert_eq!(
            sheet.transpose(1, &TransposeOptions::default()),
            Err(CifraError::InvalidKey("Bb".to_string()))
        );
    }
}
