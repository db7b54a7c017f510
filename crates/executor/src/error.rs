//! Executor error type.

use thiserror::Error;

/// Result type for command handling.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by command handlers.
///
/// `TermNotFound`, `TermExists` and `AccessDenied` are user-level outcomes;
/// handlers answer them with a message. `Io`, `Decode` and `Write` are faults.
#[derive(Debug, Error)]
pub enum Error {
    /// Term is not defined
    #[error("term not found: {term}")]
    TermNotFound {
        /// Normalized term
        term: String,
    },

    /// Term is already defined
    #[error("term already defined: {term}")]
    TermExists {
        /// Normalized term
        term: String,
    },

    /// The sender may not run this command
    #[error("{sender} may not run {command}")]
    AccessDenied {
        /// Sender mask
        sender: String,
        /// Command name
        command: String,
    },

    /// No handler recognizes the command
    #[error("unknown command: {name}")]
    UnknownCommand {
        /// Command name as received
        name: String,
    },

    /// Input rejected by the store
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why it was rejected
        reason: String,
    },

    /// The dictionary file could not be read or written
    #[error("storage error: {reason}")]
    Io {
        /// Underlying error text
        reason: String,
    },

    /// The dictionary file content is corrupt
    #[error("decode error: {reason}")]
    Decode {
        /// Underlying error text
        reason: String,
    },

    /// The response writer failed
    #[error("failed to send response: {reason}")]
    Write {
        /// Underlying error text
        reason: String,
    },
}

impl Error {
    /// True for faults (storage, decoding, transport) as opposed to
    /// user-level outcomes.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            Error::Io { .. } | Error::Decode { .. } | Error::Write { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Write {
            reason: err.to_string(),
        }
    }
}
