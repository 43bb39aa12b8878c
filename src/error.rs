//! # Error Types
//!
//! This module defines all error types for the cifra engine.
//!
//! ## Error Types
//! - `InvalidKey` - A declared key is not one of the 12 canonical key names
//! - `UnparsableChord` - A chord token does not start with a root letter A-G
//! - `InvalidInput` - A chart was required but not supplied
//! - `ConfigError` - A validation policy could not be loaded
//! - `MetadataError` - Song sheet front matter is malformed
//!
//! ## Usage
//! ```rust
//! use cifra::{transpose_key, CifraError};
//!
//! match transpose_key("H", 2) {
//!     Ok(key) => println!("New key: {}", key),
//!     Err(CifraError::InvalidKey(key)) => eprintln!("Unknown key {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CifraError {
    /// A declared musical key is not one of the canonical names.
    ///
    /// Key names are matched exactly against `C, C#, D, D#, E, F, F#, G, G#, A, A#, B`.
    ///
    /// # Example
    /// ```
    /// # use cifra::CifraError;
    /// let err = CifraError::InvalidKey("Bb".to_string());
    /// assert_eq!(err.to_string(), "Invalid key: Bb");
    /// ```
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A chord token whose root could not be parsed.
    ///
    /// Chart transposition recovers from this per token and leaves the
    /// bracketed span as it was.
    ///
    /// # Example
    /// ```
    /// # use cifra::CifraError;
    /// let err = CifraError::UnparsableChord("Chorus".to_string());
    /// assert_eq!(err.to_string(), "Unparsable chord: Chorus");
    /// ```
    #[error("Unparsable chord: {0}")]
    UnparsableChord(String),

    /// Required input was missing from a request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Validation policy could not be read or deserialized.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Song sheet front matter is not valid YAML or has bad values.
    #[error("Invalid metadata: {0}")]
    MetadataError(String),
}
