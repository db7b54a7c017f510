//! Error conversion from store errors.
//!
//! This module maps [`LexiconError`] onto the executor's [`Error`].

use crate::Error;
use lexicon_core::LexiconError;

/// Convert a LexiconError to an executor Error.
impl From<LexiconError> for Error {
    fn from(err: LexiconError) -> Self {
        match err {
            LexiconError::NotFound { term } => Error::TermNotFound { term },
            LexiconError::AlreadyExists { term } => Error::TermExists { term },
            LexiconError::InvalidInput { message } => Error::InvalidInput { reason: message },
            LexiconError::Io { path, source } => Error::Io {
                reason: format!("{}: {}", path.display(), source),
            },
            LexiconError::Decode { message } => Error::Decode { reason: message },
        }
    }
}

/// Convert a lexicon_core::Result to an executor Result.
pub fn convert_result<T>(result: lexicon_core::Result<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_not_found() {
        let converted: Error = LexiconError::not_found("rust").into();
        match converted {
            Error::TermNotFound { term } => assert_eq!(term, "rust"),
            _ => panic!("Expected TermNotFound"),
        }
    }

    #[test]
    fn test_already_exists() {
        let converted: Error = LexiconError::already_exists("rust").into();
        assert!(matches!(converted, Error::TermExists { ref term } if term == "rust"));
        assert!(!converted.is_fault());
    }

    #[test]
    fn test_io_keeps_path() {
        let err = LexiconError::io(
            "/srv/bot/dictionary.dat",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        let converted: Error = err.into();
        match converted {
            Error::Io { ref reason } => assert!(reason.contains("/srv/bot/dictionary.dat")),
            _ => panic!("Expected Io"),
        }
        assert!(converted.is_fault());
    }

    #[test]
    fn test_decode() {
        let converted = convert_result::<()>(Err(LexiconError::decode("bad header"))).unwrap_err();
        assert!(matches!(converted, Error::Decode { .. }));
    }
}
