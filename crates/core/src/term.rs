//! Normalized dictionary keys.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, Result};

/// A dictionary key in canonical (lower-cased) form.
///
/// Two inputs that differ only by case produce equal terms:
///
/// ```
/// use lexicon_core::Term;
///
/// let a = Term::new("Rust").unwrap();
/// let b = Term::new("rUST").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "rust");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Term(String);

impl Term {
    /// Normalize `raw` into a term.
    ///
    /// Surrounding whitespace is dropped. Fails with `InvalidInput` if
    /// nothing is left.
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            return Err(LexiconError::invalid_input("term must not be empty"));
        }
        Ok(Term(raw.to_lowercase()))
    }

    /// The normalized key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the term, returning the normalized key.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Term {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Term {
    type Error = LexiconError;

    fn try_from(raw: String) -> Result<Self> {
        Term::new(raw)
    }
}

impl TryFrom<&str> for Term {
    type Error = LexiconError;

    fn try_from(raw: &str) -> Result<Self> {
        Term::new(raw)
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        term.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(Term::new("HeLLo").unwrap().as_str(), "hello");
    }

    #[test]
    fn test_unicode_lowercase() {
        assert_eq!(Term::new("ÄRGER").unwrap().as_str(), "ärger");
    }

    #[test]
    fn test_keeps_interior_whitespace() {
        assert_eq!(Term::new("Hello World").unwrap().as_str(), "hello world");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(Term::new("  Foo \t").unwrap(), Term::new("foo").unwrap());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            Term::new(""),
            Err(LexiconError::InvalidInput { .. })
        ));
        assert!(matches!(
            Term::new("  \t"),
            Err(LexiconError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_serde_normalizes() {
        let term: Term = serde_json::from_str("\"FOO\"").unwrap();
        assert_eq!(term.as_str(), "foo");
        assert_eq!(serde_json::to_string(&term).unwrap(), "\"foo\"");
        assert!(serde_json::from_str::<Term>("\"\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_case_variants_are_equal(raw in "[a-zA-Z][a-zA-Z0-9 ]{0,16}") {
            let upper = Term::new(raw.to_uppercase()).unwrap();
            let lower = Term::new(raw.to_lowercase()).unwrap();
            prop_assert_eq!(upper, lower);
        }
    }
}
