//! Error types for the term dictionary.
//!
//! `NotFound` and `AlreadyExists` are ordinary outcomes of a lookup or a
//! mutation and are reported to the user as-is. `Io` and `Decode` come from
//! the persisted file and indicate a fault.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Errors produced by the term table, the codec and the store.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Lookup or removal of a term that is not in the table.
    #[error("term not found: {term}")]
    NotFound {
        /// The normalized term
        term: String,
    },

    /// Insertion of a term that is already in the table.
    #[error("term already defined: {term}")]
    AlreadyExists {
        /// The normalized term
        term: String,
    },

    /// Rejected input (empty term or empty definition).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// Opening, reading or writing the persisted file failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File the operation was performed on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The persisted content could not be decompressed or parsed.
    #[error("failed to decode dictionary: {message}")]
    Decode {
        /// Decoder message
        message: String,
    },
}

impl LexiconError {
    /// Create a `NotFound` error for `term`.
    pub fn not_found(term: impl Into<String>) -> Self {
        LexiconError::NotFound { term: term.into() }
    }

    /// Create an `AlreadyExists` error for `term`.
    pub fn already_exists(term: impl Into<String>) -> Self {
        LexiconError::AlreadyExists { term: term.into() }
    }

    /// Create an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        LexiconError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an `Io` error tagged with the file it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LexiconError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a `Decode` error.
    pub fn decode(message: impl Into<String>) -> Self {
        LexiconError::Decode {
            message: message.into(),
        }
    }

    /// True for outcomes a caller is expected to handle routinely
    /// (`NotFound`, `AlreadyExists`). These are never logged as faults.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            LexiconError::NotFound { .. } | LexiconError::AlreadyExists { .. }
        )
    }
}
