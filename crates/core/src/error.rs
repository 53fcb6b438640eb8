//! Error types for the lexfreq libraries.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the lexfreq libraries.
#[derive(Error, Debug)]
pub enum FreqError {
    /// A positive centibel level was passed to the decoder.
    #[error("Invalid frequency level: {0} cB (frequencies cannot exceed 1.0)")]
    InvalidFrequencyLevel(i32),

    /// A frequency outside (0, 1] was passed to the encoder.
    #[error("Invalid frequency: {0} (expected a value in (0, 1])")]
    InvalidFrequency(f64),

    /// No frequency table exists for the requested language tag.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A charset-restricted wordlist is too small for the requested entropy.
    #[error(
        "Not enough words to draw {bits_per_word} bits per word: \
         {available} candidates available, {required} required"
    )]
    InsufficientEntropySource {
        bits_per_word: u32,
        available: usize,
        required: u64,
    },

    /// A table violates the bucket invariants.
    #[error("Invalid frequency table: {0}")]
    InvalidTable(String),

    /// Error loading a table
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a table
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FreqError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for lexfreq operations.
pub type Result<T> = std::result::Result<T, FreqError>;
