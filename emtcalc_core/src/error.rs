//! Error types for the emtcalc_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for emtcalc_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A calculator input failed validation.
    ///
    /// The message is user-facing validation text and is meant to be
    /// surfaced to the end user verbatim.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Medication name not found in the formulary
    #[error("Unknown medication: {0}")]
    UnknownMedication(String),

    /// Formulary validation error
    #[error("Formulary validation error: {0}")]
    FormularyValidation(String),
}
