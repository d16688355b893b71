//! Error types for the gaceta-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the gaceta library.
#[derive(Error, Debug)]
pub enum GacetaError {
    /// Pattern library or matcher configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Document source error.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building matchers from a configuration.
///
/// These surface at construction time only; a built matcher never fails.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A vocabulary list that the matcher needs is empty.
    #[error("vocabulary `{field}` is empty")]
    EmptyVocabulary { field: &'static str },

    /// The identity letter set is empty or holds non-letters.
    #[error("invalid identity letter set: {0:?}")]
    InvalidLetterSet(String),

    /// Digit-length bounds are inconsistent.
    #[error("invalid digit bounds: min {min}, max {max}")]
    InvalidDigitBounds { min: usize, max: usize },

    /// A name-span word bound is inconsistent.
    #[error("invalid name word bounds: min {min}, max {max}")]
    InvalidWordBounds { min: usize, max: usize },

    /// A generated pattern failed to compile.
    #[error("pattern `{name}` failed to compile: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Errors related to loading documents.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The file extension is not a known document format.
    #[error("unsupported document format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The file could not be decoded as documents.
    #[error("malformed document file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Result type for the gaceta library.
pub type Result<T> = std::result::Result<T, GacetaError>;
