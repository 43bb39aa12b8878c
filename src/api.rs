//! # Request Boundary
//!
//! Wire types and handlers for the four transposition endpoints. Whatever
//! serves the requests (HTTP handler, CLI, wasm bindings) deserializes the
//! body, calls one function here and serializes the response.
//!
//! | Endpoint | Body | Handler | Response |
//! |---|---|---|---|
//! | `POST /transpose` | [`TransposeBody`] | [`transpose_cifra`] | [`TransposeResponse`] |
//! | `POST /transpose/validate` | [`ValidateBody`] | [`validate_cifra`] | [`ValidateResponse`] |
//! | `GET /transpose/keys` | none | [`list_keys`] | [`KeysResponse`] |
//! | `POST /transpose/key` | [`KeyBody`] | [`transpose_tom`] | [`KeyResponse`] |
//!
//! Field names follow the JSON the frontend already sends (`cifra`,
//! `tomOriginal`, `cifraTransposta`, ...).
//!
//! ## Example
//! ```rust
//! use cifra::api::{from_json, transpose_cifra, TransposeBody};
//!
//! let body: TransposeBody = from_json(r#"{"cifra": "[G]Holy", "semitones": 2, "tomOriginal": "G"}"#)?;
//! let response = transpose_cifra(&body)?;
//! assert_eq!(response.cifra_transposta, "[A]Holy");
//! assert_eq!(response.tom_final.as_deref(), Some("A"));
//! # Ok::<(), cifra::CifraError>(())
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CifraError;
use crate::pitch::{transpose_key, Notation, KEYS};
use crate::policy::ValidationPolicy;
use crate::transpose::{transpose_with, TransposeOptions, TransposeRequest, TransposeResult};
use crate::validate::{validate_with, ValidationResult};

/// Body of `POST /transpose`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposeBody {
    pub cifra: Option<String>,
    pub semitones: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tom_original: Option<String>,
    #[serde(default)]
    pub notation: Notation,
    #[serde(default)]
    pub transpose_bass: bool,
}

/// Response of `POST /transpose`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposeResponse {
    pub cifra_original: String,
    pub cifra_transposta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tom_original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tom_final: Option<String>,
    pub semitones: i32,
}

impl From<TransposeResult> for TransposeResponse {
    fn from(result: TransposeResult) -> Self {
        Self {
            cifra_original: result.original_chart,
            cifra_transposta: result.transposed_chart,
            tom_original: result.original_key,
            tom_final: result.final_key,
            semitones: result.semitones,
        }
    }
}

/// Body of `POST /transpose/validate`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateBody {
    pub cifra: Option<String>,
}

/// Response of `POST /transpose/validate`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub chords_found: Vec<String>,
}

impl From<ValidationResult> for ValidateResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            valid: result.valid,
            errors: result.errors,
            warnings: result.warnings,
            chords_found: result.chords_found,
        }
    }
}

/// Response of `GET /transpose/keys`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeysResponse {
    pub keys: Vec<&'static str>,
}

/// Body of `POST /transpose/key`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyBody {
    pub original_key: String,
    pub semitones: i32,
}

/// Response of `POST /transpose/key`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResponse {
    pub original_key: String,
    pub new_key: String,
    pub semitones: i32,
}

/// Error payload for any failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable code
    pub error: &'static str,
    pub message: String,
}

impl From<&CifraError> for ErrorBody {
    fn from(e: &CifraError) -> Self {
        let error = match e {
            CifraError::InvalidKey(_) => "INVALID_KEY",
            CifraError::UnparsableChord(_) => "INVALID_CHORD",
            CifraError::InvalidInput(_) => "INVALID_INPUT",
            CifraError::ConfigError(_) => "INVALID_CONFIG",
            CifraError::MetadataError(_) => "INVALID_METADATA",
        };
        Self {
            error,
            message: e.to_string(),
        }
    }
}

/// Deserialize a JSON request body, reporting failures as `InvalidInput`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, CifraError> {
    serde_json::from_str(json).map_err(|e| CifraError::InvalidInput(e.to_string()))
}

fn require_cifra(cifra: &Option<String>) -> Result<&str, CifraError> {
    cifra
        .as_deref()
        .ok_or_else(|| CifraError::InvalidInput("cifra is required".to_string()))
}

/// Handle `POST /transpose`.
///
/// # Errors
/// - [`CifraError::InvalidInput`] when `cifra` is missing
/// - [`CifraError::InvalidKey`] when `tomOriginal` is not a canonical key
pub fn transpose_cifra(body: &TransposeBody) -> Result<TransposeResponse, CifraError> {
    let chart = require_cifra(&body.cifra)?;
    let request = TransposeRequest {
        chart: chart.to_string(),
        semitones: body.semitones,
        original_key: body.tom_original.clone(),
    };
    let options = TransposeOptions {
        notation: body.notation,
        transpose_bass: body.transpose_bass,
    };
    Ok(transpose_with(&request, &options)?.into())
}

/// Handle `POST /transpose/validate` with the default policy.
pub fn validate_cifra(body: &ValidateBody) -> Result<ValidateResponse, CifraError> {
    validate_cifra_with(body, &ValidationPolicy::default())
}

/// Handle `POST /transpose/validate`.
///
/// # Errors
/// [`CifraError::InvalidInput`] when `cifra` is missing. Bad chords are
/// reported in the response, never as an error.
pub fn validate_cifra_with(
    body: &ValidateBody,
    policy: &ValidationPolicy,
) -> Result<ValidateResponse, CifraError> {
    let chart = require_cifra(&body.cifra)?;
    Ok(validate_with(chart, policy).into())
}

/// Handle `GET /transpose/keys`.
pub fn list_keys() -> KeysResponse {
    KeysResponse {
        keys: KEYS.to_vec(),
    }
}

/// Handle `POST /transpose/key`.
pub fn transpose_tom(body: &KeyBody) -> Result<KeyResponse, CifraError> {
    let new_key = transpose_key(&body.original_key, body.semitones)?;
    Ok(KeyResponse {
        original_key: body.original_key.clone(),
        new_key: new_key.to_string(),
        semitones: body.semitones,
    })
}
